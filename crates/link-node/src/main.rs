//! Telemetry Link Loopback Demo - Main Entry Point
//!
//! One thread plays the sending node, feeding serialized frames straight
//! into the transfer slot; the main loop plays the receiving node. A
//! short simulated button press lands partway through the run.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use frame_codec::FRAME_LEN;
use frame_digest::Crc8;
use link_node::{
    init_logging, BuildInfo, LinkConsumer, LinkNodeConfig, SlotSink, TelemetrySampler,
};
use tracing::{info, warn};
use transfer_slot::transfer_slot;

/// Simulated button press window (milliseconds since start).
const PRESS_WINDOW_MS: std::ops::Range<u32> = 1200..1400;

fn load_config() -> LinkNodeConfig {
    match std::env::args().nth(1) {
        Some(path) => match LinkNodeConfig::from_file(&path) {
            Ok(config) => {
                info!("config loaded from {path}");
                config
            }
            Err(err) => {
                warn!("{err}, using defaults");
                LinkNodeConfig::default()
            }
        },
        None => LinkNodeConfig::default(),
    }
}

fn main() {
    init_logging();

    info!("=== {} ===", BuildInfo::current());
    let config = load_config();
    info!(
        "send period {}ms, demo duration {}ms",
        config.send_period_ms, config.demo_duration_ms
    );

    let (feeder, mut reader) = transfer_slot::<FRAME_LEN>();
    let running = Arc::new(AtomicBool::new(true));

    let sender_running = Arc::clone(&running);
    let send_period_ms = config.send_period_ms;
    let sender = thread::spawn(move || {
        let started = Instant::now();
        let mut wire = SlotSink(feeder);
        let mut sampler = TelemetrySampler::<Crc8>::new(send_period_ms);
        sampler.seed_clock(0);

        while sender_running.load(Ordering::Relaxed) {
            let now_ms = started.elapsed().as_millis() as u32;
            let pressed = PRESS_WINDOW_MS.contains(&now_ms);
            if let Err(err) = sampler.tick(now_ms, pressed, &mut wire) {
                warn!("send failed: {err}");
            }
            thread::sleep(Duration::from_millis(1));
        }
    });

    let mut consumer = LinkConsumer::<Crc8>::with_style(config.dump_style);
    let deadline = Instant::now() + Duration::from_millis(config.demo_duration_ms);
    while Instant::now() < deadline {
        if consumer.poll(&mut reader).is_none() {
            thread::sleep(Duration::from_millis(1));
        }
    }

    running.store(false, Ordering::Relaxed);
    if sender.join().is_err() {
        warn!("sender thread panicked");
    }
    info!(
        "done: {} frames ok, {} dropped",
        consumer.frames_ok(),
        consumer.frames_dropped()
    );
}
