use chrono::{
	TimeZone,
	Utc,
};
use tcx::{
	enums::{
		Intensity,
		SensorState,
		Sport,
		TriggerMethod,
	},
	extensions::ActivityExtensions,
	units::{
		self,
		PaceUnit,
	},
	AbstractSource,
	ActivityExtension,
	Diagnostic,
	TcxDocument,
};
use xml_bind::extensions::ExtensionEntry;

const RUNNING: &str = include_str!("data/running.tcx");

fn running() -> TcxDocument {
	tcx::parse_str(RUNNING).unwrap()
}

#[test]
fn activity_properties() {
	let doc = running();
	let activities = doc.root.activities();
	assert_eq!(activities.len(), 1);
	let activity = &activities[0];
	assert_eq!(activity.sport, Some(Sport::Running));
	assert_eq!(activity.id, Utc.with_ymd_and_hms(2014, 12, 26, 10, 0, 39).unwrap());
	assert_eq!(activity.laps.len(), 2);
	assert_eq!(activity.notes.as_deref(), Some("Morning run"));
}

#[test]
fn lap_properties() {
	let doc = running();
	let lap = &doc.root.activities()[0].laps[0];
	assert_eq!(lap.start_time, Some(Utc.with_ymd_and_hms(2014, 12, 26, 10, 0, 39).unwrap()));
	assert_eq!(lap.total_time_seconds, Some(201.0));
	assert_eq!(lap.distance_meters, Some(1000.0));
	assert_eq!(lap.maximum_speed, Some(6.105999946594238));
	assert_eq!(lap.calories, Some(66));
	assert_eq!(lap.average_heart_rate_bpm.map(|hr| hr.value), Some(167));
	assert_eq!(lap.maximum_heart_rate_bpm.map(|hr| hr.value), Some(179));
	assert_eq!(lap.intensity, Some(Intensity::Active));
	assert_eq!(lap.trigger_method, Some(TriggerMethod::Manual));
	assert_eq!(lap.avg_speed(), Some(4.974999904632568));
	assert_eq!(lap.max_run_cadence(), Some(90));
	assert_eq!(lap.end_time(), Some(Utc.with_ymd_and_hms(2014, 12, 26, 10, 4, 0).unwrap()));
}

#[test]
fn trackpoint_properties() {
	let doc = running();
	let activity = &doc.root.activities()[0];
	let points: Vec<_> = activity.trackpoints().collect();
	assert_eq!(points.len(), 3);

	let first = points[0];
	assert_eq!(first.altitude_meters, Some(279.0));
	assert_eq!(first.distance_meters, Some(0.0));
	assert_eq!(first.heart_rate_bpm.map(|hr| hr.value), Some(113));
	let position = first.position.unwrap();
	assert_eq!(position.latitude_degrees, 46.09344659373164);
	assert_eq!(position.longitude_degrees, 14.678033776581287);
	assert_eq!(first.speed(), Some(0.0));
	assert_eq!(points[1].tpx().and_then(|tpx| tpx.run_cadence), Some(78));

	assert_eq!(points[2].sensor_state, Some(SensorState::Present));
	assert!(points[2].extensions.is_none());
}

#[test]
fn creator_and_author_alternatives() {
	let doc = running();
	let creator = doc.root.activities()[0].creator.as_ref().unwrap();
	let device = creator.device().unwrap();
	assert_eq!(device.name.as_deref(), Some("Garmin Forerunner 910XT"));
	assert_eq!(device.unit_id, Some(3881644365));
	assert_eq!(device.product_id, Some(1328));
	assert_eq!(device.version.as_ref().map(ToString::to_string).as_deref(), Some("3.0.0.0"));

	match doc.root.author.as_ref().unwrap() {
		AbstractSource::Application(app) => {
			assert_eq!(app.lang_id.as_deref(), Some("en"));
			assert_eq!(app.part_number.as_deref(), Some("006-D2449-00"));
			let version = app.build.as_ref().and_then(|b| b.version.as_ref()).unwrap();
			assert_eq!((version.version_major, version.version_minor), (14, 10));
		},
		other => panic!("expected application, got {:?}", other),
	}
}

#[test]
fn extensions_known_and_opaque() {
	let doc = running();
	let laps = &doc.root.activities()[0].laps;

	let first = laps[0].extensions.as_ref().unwrap();
	let tags: Vec<_> = first.iter().map(ExtensionEntry::tag).collect();
	assert_eq!(tags, ["LX", "XYZ"]);
	assert!(matches!(first.iter().next(), Some(ExtensionEntry::Known(ActivityExtension::Lx(_)))));
	let xyz = first.opaque().next().unwrap();
	assert_eq!(xyz.attribute(None, "Foo"), Some("1"));

	let weather = laps[1].extensions.as_ref().and_then(|e| e.opaque().next()).unwrap();
	assert_eq!(weather.qualified_name(), "wx:Weather");
	assert_eq!(weather.attribute(Some("urn:example:weather"), "unit"), Some("C"));
	assert_eq!(laps[1].extensions.lx().and_then(|lx| lx.avg_run_cadence), Some(86));

	assert_eq!(
		doc.diagnostics,
		[
			Diagnostic::UnknownExtension { tag: "XYZ".into() },
			Diagnostic::UnknownExtension { tag: "wx:Weather".into() },
		]
	);
}

#[test]
fn activity_aggregates() {
	let doc = running();
	let activity = &doc.root.activities()[0];
	assert_eq!(activity.total_time_seconds(), 400.0);
	assert_eq!(activity.distance_meters(), 2000.0);
	assert_eq!(activity.maximum_speed(), Some(6.105999946594238));
	assert_eq!(activity.calories(), 136);
	// one track per lap: plain mean of the lap averages
	assert_eq!(activity.average_heart_rate_bpm(), 169.5);
	assert_eq!(activity.maximum_heart_rate_bpm(), Some(181));
	assert_eq!(activity.max_run_cadence(), Some(92));
	assert_eq!(activity.max_bike_cadence(), None);
	assert_eq!(activity.steps(), 0);
	assert_eq!(activity.start_time(), Some(Utc.with_ymd_and_hms(2014, 12, 26, 10, 0, 39).unwrap()));
	assert_eq!(activity.end_time(), Some(Utc.with_ymd_and_hms(2014, 12, 26, 10, 7, 19).unwrap()));
}

#[test]
fn display_units() {
	let doc = running();
	let activity = &doc.root.activities()[0];
	assert_eq!(activity.average_speed(), 5.0);
	assert_eq!(units::pace_string(activity.average_speed(), PaceUnit::Kilometer).as_deref(), Some("3m20s/km"));
	assert_eq!(units::speed_string(activity.average_speed()).as_deref(), Some("18.0km/h"));
	assert_eq!(units::distance_string(activity.distance_meters()).as_deref(), Some("2km"));

	let lap_speed = 4.96999979019165;
	assert_eq!(units::kilometers_per_hour_string(lap_speed).as_deref(), Some("17.9km/h"));
	assert_eq!(units::miles_per_hour_string(lap_speed).as_deref(), Some("11.1mph"));
	assert_eq!(units::pace_string(lap_speed, PaceUnit::Kilometer).as_deref(), Some("3m21s/km"));
	assert_eq!(units::pace_string(lap_speed, PaceUnit::Mile).as_deref(), Some("5m24s/mi"));
}
