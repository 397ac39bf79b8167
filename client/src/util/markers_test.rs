use super::*;

const STATUSES: [AlertStatus; 3] = [AlertStatus::Active, AlertStatus::Acknowledged, AlertStatus::Resolved];
const TYPES: [AlertType; 3] = [AlertType::Panic, AlertType::Accident, AlertType::Assistance];

#[test]
fn active_alerts_pulse() {
    for alert_type in TYPES {
        let style = marker_style(&LocationCategory::Alert { status: AlertStatus::Active, alert_type });
        assert!(style.pulsing, "{alert_type:?} should pulse while active");
        assert_eq!(style.class(), "map-marker map-marker--pulse");
    }
}

#[test]
fn resolved_alerts_never_pulse() {
    for alert_type in TYPES {
        let style = marker_style(&LocationCategory::Alert { status: AlertStatus::Resolved, alert_type });
        assert!(!style.pulsing);
        assert_eq!(style.class(), "map-marker");
    }
}

#[test]
fn acknowledged_alerts_do_not_pulse() {
    let style = marker_style(&LocationCategory::Alert {
        status: AlertStatus::Acknowledged,
        alert_type: AlertType::Panic,
    });
    assert!(!style.pulsing);
}

#[test]
fn clients_and_current_position_do_not_pulse() {
    assert!(!marker_style(&LocationCategory::Client).pulsing);
    assert!(!marker_style(&LocationCategory::Current).pulsing);
}

#[test]
fn alert_color_follows_status_not_type() {
    for status in STATUSES {
        for alert_type in TYPES {
            let style = marker_style(&LocationCategory::Alert { status, alert_type });
            assert_eq!(style.color, alert_status_color(status));
            assert_eq!(style.icon, alert_type_icon(alert_type));
        }
    }
}

#[test]
fn status_colors_are_distinct() {
    assert_ne!(alert_status_color(AlertStatus::Active), alert_status_color(AlertStatus::Acknowledged));
    assert_ne!(alert_status_color(AlertStatus::Active), alert_status_color(AlertStatus::Resolved));
    assert_ne!(alert_status_color(AlertStatus::Acknowledged), alert_status_color(AlertStatus::Resolved));
}

#[test]
fn client_and_current_markers_are_distinguishable() {
    assert_ne!(marker_style(&LocationCategory::Client), marker_style(&LocationCategory::Current));
}

#[test]
fn labels_cover_every_variant() {
    assert_eq!(alert_status_label(AlertStatus::Acknowledged), "Acknowledged");
    assert_eq!(alert_type_label(AlertType::Assistance), "Assistance");
    assert_eq!(category_label(&LocationCategory::Current), "Your location");
    assert_eq!(
        category_label(&LocationCategory::Alert { status: AlertStatus::Active, alert_type: AlertType::Panic }),
        "Panic"
    );
}

#[test]
fn format_lat_lng_uses_five_decimals() {
    assert_eq!(format_lat_lng(LatLng::new(40.7128, -74.006)), "40.71280, -74.00600");
}
