//! Animation constants and the fixed overlay tables.

use crate::enums::Tone;
use crate::types::GeoCoord;

/// Animation tick period in milliseconds (20 Hz).
pub const TICK_PERIOD_MS: u64 = 50;

// --- Home base ---

/// HQ (London). Origin of every agent uplink arc.
pub const HQ: GeoCoord = GeoCoord::new(-0.1278, 51.5074);
pub const HQ_LABEL: &str = "MI6 HQ";
/// Degrees per tick of the outer HQ square (starts at 45°).
pub const HQ_OUTER_SPIN: f64 = 0.5;
/// Degrees per tick of the inner HQ square (counter-rotating).
pub const HQ_INNER_SPIN: f64 = -0.3;

// --- Map ---

pub const PROJECTION_NAME: &str = "geoNaturalEarth1";
pub const PROJECTION_LABEL: &str = "NATURAL EARTH";
pub const OVERLAY_TITLE: &str = "GEO-INTEL OVERLAY v7.3";
pub const BOUNDARY_SOURCE: &str = "https://cdn.jsdelivr.net/npm/world-atlas@2/countries-110m.json";
/// Graticule spacing in degrees.
pub const GRATICULE_STEP: f64 = 10.0;
/// Scan line sweep, percent of map height per tick.
pub const SCAN_LINE_RATE: f64 = 0.5;

// --- Data streams ---

/// Dash offset advance per tick shared by streams and uplink arcs.
pub const STREAM_DASH_SPEED: f64 = 0.8;
/// Extra dash offset per stream index so streams do not flow in lockstep.
pub const STREAM_INDEX_OFFSET: f64 = 20.0;
pub const STREAM_OPACITY: f64 = 0.2;
/// Stream and arc opacity while a mission zone is active.
pub const DIMMED_LINK_OPACITY: f64 = 0.07;

/// One animated route between two cities.
#[derive(Debug, Clone, Copy)]
pub struct DataStream {
    pub from: GeoCoord,
    pub to: GeoCoord,
    pub tone: Tone,
}

const fn stream(from: (f64, f64), to: (f64, f64), tone: Tone) -> DataStream {
    DataStream {
        from: GeoCoord::new(from.0, from.1),
        to: GeoCoord::new(to.0, to.1),
        tone,
    }
}

pub const DATA_STREAMS: [DataStream; 12] = [
    stream((-0.13, 51.51), (37.62, 55.76), Tone::Gold),
    stream((-0.13, 51.51), (2.35, 48.86), Tone::Gold),
    stream((-0.13, 51.51), (55.27, 25.20), Tone::Gold),
    stream((2.35, 48.86), (12.49, 41.89), Tone::Green),
    stream((37.62, 55.76), (104.07, 30.57), Tone::Cyan),
    stream((121.47, 31.23), (139.69, 35.69), Tone::Red),
    stream((-99.13, 19.43), (-73.94, 40.71), Tone::Green),
    stream((55.27, 25.20), (77.21, 28.61), Tone::Cyan),
    stream((-73.94, 40.71), (-0.13, 51.51), Tone::Gold),
    stream((139.69, 35.69), (151.21, -33.87), Tone::Amber),
    stream((2.35, 48.86), (-3.70, 40.42), Tone::Green),
    stream((13.41, 52.52), (37.62, 55.76), Tone::Cyan),
];

// --- Surveillance zones ---

/// Opacity factor applied to surveillance zones while a mission zone is active.
pub const ZONE_DIM_FACTOR: f64 = 0.3;

/// A pulsing circle over a region of interest.
#[derive(Debug, Clone, Copy)]
pub struct SurveillanceZone {
    pub center: GeoCoord,
    pub radius: f64,
    pub tone: Tone,
    pub label: &'static str,
}

pub const SURVEILLANCE_ZONES: [SurveillanceZone; 5] = [
    SurveillanceZone {
        center: GeoCoord::new(37.62, 55.76),
        radius: 12.0,
        tone: Tone::Red,
        label: "ZONE ALPHA",
    },
    SurveillanceZone {
        center: GeoCoord::new(121.47, 31.23),
        radius: 10.0,
        tone: Tone::Red,
        label: "ZONE BRAVO",
    },
    SurveillanceZone {
        center: GeoCoord::new(55.27, 25.20),
        radius: 8.0,
        tone: Tone::Amber,
        label: "ZONE CHARLIE",
    },
    SurveillanceZone {
        center: GeoCoord::new(36.82, 1.29),
        radius: 6.0,
        tone: Tone::Cyan,
        label: "ZONE DELTA",
    },
    SurveillanceZone {
        center: GeoCoord::new(-99.13, 19.43),
        radius: 7.0,
        tone: Tone::Amber,
        label: "ZONE ECHO",
    },
];

// --- Satellites ---

/// Latitude swing of a satellite track around its base (degrees).
pub const SATELLITE_LAT_SWING: f64 = 15.0;
/// Latitude oscillation rate, multiplied by the satellite speed.
pub const SATELLITE_LAT_RATE: f64 = 0.02;
/// Trail dots drawn behind each satellite.
pub const SATELLITE_TRAIL_DOTS: u32 = 4;

/// A fake tracking satellite.
#[derive(Debug, Clone, Copy)]
pub struct SatelliteOrbit {
    pub id: u32,
    pub base_lat: f64,
    /// Degrees of longitude per tick; the sign is the direction of travel.
    pub speed: f64,
    pub tone: Tone,
}

pub const SATELLITE_ORBITS: [SatelliteOrbit; 3] = [
    SatelliteOrbit {
        id: 1,
        base_lat: 30.0,
        speed: 0.4,
        tone: Tone::Cyan,
    },
    SatelliteOrbit {
        id: 2,
        base_lat: -10.0,
        speed: -0.3,
        tone: Tone::Cyan,
    },
    SatelliteOrbit {
        id: 3,
        base_lat: 50.0,
        speed: 0.25,
        tone: Tone::Gold,
    },
];

// --- Crypto terminal ---

/// Full terminal cycle before the revealed lines are cleared.
pub const TERMINAL_CYCLE_MS: u64 = 8000;
/// Pause between clearing and replaying the script.
pub const TERMINAL_RESTART_PAUSE_MS: u64 = 300;
/// Delay added to every scripted offset of the builtin terminal.
pub const TERMINAL_LEAD_IN_MS: u64 = 500;

/// Builtin crypto terminal script: `(text, offset ms)`.
pub const TERMINAL_SCRIPT: [(&str, u64); 14] = [
    ("> INIT SECURE_CHANNEL --protocol=AES256-GCM", 0),
    ("[OK] Channel established. Latency: 12ms", 400),
    ("> AUTH --cert=/vault/omega.pem --level=5", 800),
    ("[OK] Authentication verified. Clearance: OMEGA", 1200),
    ("> QUERY AGENT_NETWORK --status=ALL", 1600),
    ("[INFO] 8 agents registered. 5 active. 1 compromised.", 2000),
    ("> DECRYPT INTERCEPT T-001 --cipher=SPECTRE", 2400),
    ("[WARN] Partial decrypt. Entropy mismatch at block 47.", 2800),
    ("> TRACE FINANCIAL_FLOW --target=JANUS --depth=6", 3200),
    ("[INFO] 6 shell companies identified. Total: $47.2M", 3600),
    ("> SAT_UPLINK MENTOR-7 --region=MIDEAST", 4000),
    ("[OK] Uplink active. Signal: -67dBm. Window: 75min", 4400),
    ("> MONITOR THREAT_MATRIX --refresh=5s", 4800),
    ("[ALERT] Threat level ELEVATED. 2 critical events.", 5200),
];

// --- Proximity radar ---

/// One full sweep revolution.
pub const RADAR_SWEEP_PERIOD_MS: u64 = 4000;
pub const RADAR_RANGE_LABEL: &str = "50KM";
/// Range ring radii in widget units (200×200 viewbox).
pub const RADAR_RINGS: [f64; 3] = [30.0, 60.0, 90.0];

/// A fixed radar contact that pulses between two opacities.
#[derive(Debug, Clone, Copy)]
pub struct RadarBlip {
    pub x: f64,
    pub y: f64,
    pub tone: Tone,
    pub min_opacity: f64,
    pub max_opacity: f64,
    pub period_ms: u64,
}

pub const RADAR_BLIPS: [RadarBlip; 4] = [
    RadarBlip {
        x: 135.0,
        y: 70.0,
        tone: Tone::Green,
        min_opacity: 0.3,
        max_opacity: 0.9,
        period_ms: 2000,
    },
    RadarBlip {
        x: 65.0,
        y: 130.0,
        tone: Tone::Green,
        min_opacity: 0.5,
        max_opacity: 1.0,
        period_ms: 2500,
    },
    RadarBlip {
        x: 120.0,
        y: 140.0,
        tone: Tone::Red,
        min_opacity: 0.4,
        max_opacity: 0.9,
        period_ms: 1500,
    },
    RadarBlip {
        x: 80.0,
        y: 60.0,
        tone: Tone::Amber,
        min_opacity: 0.3,
        max_opacity: 0.8,
        period_ms: 3000,
    },
];

// --- Periodic chrome ---

/// Interception counter jitter period.
pub const STATS_JITTER_PERIOD_MS: u64 = 3000;
/// Top bar clock refresh period.
pub const CLOCK_REFRESH_MS: u64 = 1000;

// --- Viewport ---

pub const DEFAULT_CENTER: GeoCoord = GeoCoord::new(20.0, 20.0);
pub const DEFAULT_ZOOM: f64 = 1.0;
pub const MIN_ZOOM: f64 = 1.0;
pub const MAX_ZOOM: f64 = 8.0;
pub const PROJECTION_SCALE: f64 = 160.0;
/// Map canvas size in screen units.
pub const MAP_WIDTH: f64 = 800.0;
pub const MAP_HEIGHT: f64 = 600.0;
/// Click hit-test radius around agent markers (screen units).
pub const PICK_RADIUS: f64 = 8.0;
