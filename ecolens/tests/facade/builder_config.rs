use ecolens::{AnalyticsConfig, DataPoint, Ecolens, EcolensError, Indicator, RollingWindow};

#[test]
fn defaults() {
    let lens = Ecolens::builder().build().unwrap();
    let cfg = lens.config();
    assert_eq!(cfg.moving_average_windows, vec![3, 6, 12]);
    assert_eq!(cfg.rolling_window.periods(), 12);
    assert_eq!(cfg.histogram_bins, 10);
    assert_eq!(cfg.min_points, 2);
}

#[test]
fn fluent_setters_apply() {
    let lens = Ecolens::builder()
        .moving_average_windows(&[2, 4])
        .rolling_window(RollingWindow::Long)
        .histogram_bins(20)
        .min_points(5)
        .build()
        .unwrap();
    assert_eq!(
        lens.config(),
        &AnalyticsConfig {
            moving_average_windows: vec![2, 4],
            rolling_window: RollingWindow::Long,
            histogram_bins: 20,
            min_points: 5,
        }
    );
}

#[test]
fn invalid_parameters_are_rejected_at_build() {
    let cases = [
        Ecolens::builder().moving_average_windows(&[3, 0]),
        Ecolens::builder().rolling_window(RollingWindow::Custom(1)),
        Ecolens::builder().histogram_bins(0),
        Ecolens::builder().min_points(1),
    ];
    for b in cases {
        assert!(matches!(b.build(), Err(EcolensError::InvalidArg(_))));
    }
}

#[test]
fn misordered_registered_series_is_rejected() {
    let dup = vec![
        DataPoint::new("2024-01-01", 1.0),
        DataPoint::new("2024-01-01", 2.0),
    ];
    let res = Ecolens::builder().with_series(Indicator::Cpi, dup).build();
    assert!(matches!(res, Err(EcolensError::Data(_))));
}

#[test]
fn set_series_validates_and_replaces() {
    let mut lens = Ecolens::builder()
        .with_series(Indicator::Nifty, vec![DataPoint::new("2024-01-01", 1.0)])
        .build()
        .unwrap();

    let backwards = vec![
        DataPoint::new("2024-03-01", 3.0),
        DataPoint::new("2024-02-01", 2.0),
    ];
    assert!(matches!(
        lens.set_series(Indicator::Nifty, backwards),
        Err(EcolensError::Data(_))
    ));
    assert_eq!(lens.series(Indicator::Nifty).unwrap().len(), 1);

    let fresh = vec![
        DataPoint::new("2024-02-01", 2.0),
        DataPoint::new("2024-03-01", 3.0),
    ];
    lens.set_series(Indicator::Nifty, fresh.clone()).unwrap();
    assert_eq!(lens.series(Indicator::Nifty).unwrap(), fresh);
}
