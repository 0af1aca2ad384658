//! Unit tests for vt-core primitives.

#[cfg(test)]
mod geo {
    use crate::{GeoPoint, Route, VtError, interpolate};

    const START: GeoPoint = GeoPoint::new(22.1696, 91.4996);
    const END:   GeoPoint = GeoPoint::new(22.2637, 91.7159);

    #[test]
    fn zero_distance() {
        for p in [START, END, GeoPoint::new(0.0, 0.0), GeoPoint::new(-89.9, 179.9)] {
            assert_eq!(p.distance_m(p), 0.0);
        }
    }

    #[test]
    fn distance_is_symmetric() {
        let pairs = [
            (START, END),
            (GeoPoint::new(30.0, -88.0), GeoPoint::new(31.0, -88.0)),
            (GeoPoint::new(-33.86, 151.21), GeoPoint::new(51.5, -0.12)),
        ];
        for (a, b) in pairs {
            assert_eq!(a.distance_m(b), b.distance_m(a));
        }
    }

    #[test]
    fn one_degree_of_latitude() {
        // One degree on a 6 378 137 m sphere ≈ 111 319.5 m.
        let a = GeoPoint::new(30.0, -88.0);
        let b = GeoPoint::new(31.0, -88.0);
        let d = a.distance_m(b);
        assert!((d - 111_319.5).abs() < 1.0, "got {d}");
    }

    #[test]
    fn default_leg_length() {
        let d = START.distance_m(END);
        assert!((d - 24_629.46).abs() < 1.0, "got {d}");
    }

    #[test]
    fn interpolate_endpoints_are_exact() {
        assert_eq!(interpolate(START, END, 0.0), START);
        assert_eq!(interpolate(START, END, 1.0), END);
        assert_eq!(START.lerp(END, 1.0), END);
    }

    #[test]
    fn interpolate_stays_on_segment() {
        const EPS: f64 = 1e-12;
        let (lat_lo, lat_hi) = (START.lat.min(END.lat) - EPS, START.lat.max(END.lat) + EPS);
        let (lon_lo, lon_hi) = (START.lon.min(END.lon) - EPS, START.lon.max(END.lon) + EPS);
        for i in 0..=100 {
            let f = i as f64 / 100.0;
            let p = interpolate(START, END, f);
            assert!((lat_lo..=lat_hi).contains(&p.lat), "f={f} lat={}", p.lat);
            assert!((lon_lo..=lon_hi).contains(&p.lon), "f={f} lon={}", p.lon);

            // Same proportion along both axes → collinear with the endpoints.
            let t_lat = (p.lat - START.lat) / (END.lat - START.lat);
            let t_lon = (p.lon - START.lon) / (END.lon - START.lon);
            assert!((t_lat - f).abs() < 1e-9 && (t_lon - f).abs() < 1e-9);
        }
    }

    #[test]
    fn interpolate_midpoint() {
        let p = interpolate(GeoPoint::new(0.0, 10.0), GeoPoint::new(2.0, 20.0), 0.5);
        assert_eq!(p, GeoPoint::new(1.0, 15.0));
    }

    #[test]
    fn interpolate_does_not_clamp() {
        let p = interpolate(GeoPoint::new(0.0, 0.0), GeoPoint::new(1.0, 1.0), 2.0);
        assert_eq!(p, GeoPoint::new(2.0, 2.0));
    }

    #[test]
    fn route_clamps_position() {
        let route = Route::new(START, END).unwrap();
        assert_eq!(route.position_at(1.7), END);
        assert_eq!(route.position_at(-0.3), START);
        assert_eq!(route.polyline(), [START, END]);
        assert_eq!(route.center(), START);
        assert!(!route.is_degenerate());
    }

    #[test]
    fn route_same_point_is_degenerate() {
        let route = Route::new(START, START).unwrap();
        assert!(route.is_degenerate());
        assert_eq!(route.total_distance_m(), 0.0);
    }

    #[test]
    fn route_rejects_bad_coordinates() {
        let err = Route::new(GeoPoint::new(91.0, 0.0), END).unwrap_err();
        assert_eq!(err, VtError::InvalidCoordinate { lat: 91.0, lon: 0.0 });
        assert!(Route::new(START, GeoPoint::new(0.0, 180.5)).is_err());
        assert!(Route::new(GeoPoint::new(f64::NAN, 0.0), END).is_err());
    }

    #[test]
    fn display() {
        assert_eq!(GeoPoint::new(1.5, -2.25).to_string(), "(1.500000, -2.250000)");
    }
}

#[cfg(test)]
mod time {
    use crate::{SimClock, SimConfig, Tick, VtError};

    #[test]
    fn tick_display() {
        assert_eq!(Tick::ZERO, Tick(0));
        assert_eq!(Tick(7).to_string(), "T7");
    }

    #[test]
    fn clock_elapsed() {
        let mut clock = SimClock::new(500.0);
        assert_eq!(clock.elapsed_secs(), 0.0);
        clock.advance();
        assert_eq!(clock.elapsed_secs(), 0.5);
        clock.advance();
        assert_eq!(clock.elapsed_secs(), 1.0);
    }

    #[test]
    fn clock_hms() {
        let mut clock = SimClock::new(1000.0);
        for _ in 0..3_725 {
            clock.advance();
        }
        assert_eq!(clock.elapsed_hms(), (1, 2, 5));
        assert_eq!(clock.to_string(), "T3725 (1:02:05)");
    }

    #[test]
    fn from_rates_derivation() {
        let cfg = SimConfig::from_rates(20.0, 2.0).unwrap();
        assert!((cfg.speed_mps() - 5.5556).abs() < 1e-3);
        assert_eq!(cfg.refresh_interval_ms(), 500.0);
        assert_eq!(cfg.refresh_interval().as_millis(), 500);
        assert!((cfg.step_m() - 2.7778).abs() < 1e-3);
    }

    #[test]
    fn rejects_non_positive_inputs() {
        assert_eq!(SimConfig::new(0.0, 500.0), Err(VtError::InvalidSpeed(0.0)));
        assert_eq!(SimConfig::new(-1.0, 500.0), Err(VtError::InvalidSpeed(-1.0)));
        assert_eq!(SimConfig::new(1.0, 0.0), Err(VtError::InvalidRefreshRate(0.0)));
        assert!(SimConfig::new(f64::INFINITY, 500.0).is_err());
        assert!(SimConfig::from_rates(-20.0, 2.0).is_err());
    }

    #[test]
    fn bad_frame_rate_reported_in_fps() {
        let err = SimConfig::from_rates(20.0, 0.0).unwrap_err();
        assert_eq!(err, VtError::InvalidRefreshRateFps(0.0));
        assert!(err.to_string().contains("frames per second"), "got {err}");
        assert_eq!(SimConfig::from_rates(20.0, -2.0), Err(VtError::InvalidRefreshRateFps(-2.0)));
        assert!(SimConfig::new(1.0, 0.0).unwrap_err().to_string().contains("milliseconds"));
    }

    #[test]
    fn rejects_overflowing_step() {
        let err = SimConfig::new(f64::MAX, f64::MAX).unwrap_err();
        assert!(matches!(err, VtError::Config(_)), "got {err:?}");
    }

    #[test]
    fn ticks_to_arrival_rounds_up() {
        let cfg = SimConfig::new(10.0, 1000.0).unwrap(); // 10 m per tick
        assert_eq!(cfg.ticks_to_arrival(0.0), 0);
        assert_eq!(cfg.ticks_to_arrival(1.0), 1);
        assert_eq!(cfg.ticks_to_arrival(95.0), 10);
        assert_eq!(cfg.ticks_to_arrival(100.0), 10);
    }

    #[test]
    fn ticks_to_arrival_default_voyage() {
        let cfg = SimConfig::from_rates(20.0, 2.0).unwrap();
        assert_eq!(cfg.ticks_to_arrival(24_629.46), 8_867);
    }
}

#[cfg(test)]
mod config {
    use crate::{GeoPoint, VoyageConfig, VtError};

    #[test]
    fn default_validates() {
        let (sim, route) = VoyageConfig::default().validate().unwrap();
        assert_eq!(sim.refresh_interval_ms(), 500.0);
        assert_eq!(route.start(), VoyageConfig::DEFAULT_START);
        assert_eq!(route.end(), VoyageConfig::DEFAULT_END);
    }

    #[test]
    fn reports_first_bad_field() {
        let cfg = VoyageConfig { speed_kmph: 0.0, ..VoyageConfig::default() };
        assert_eq!(cfg.validate().unwrap_err(), VtError::InvalidSpeed(0.0));

        let cfg = VoyageConfig { end: GeoPoint::new(0.0, 200.0), ..VoyageConfig::default() };
        assert!(matches!(cfg.validate(), Err(VtError::InvalidCoordinate { .. })));
    }
}
