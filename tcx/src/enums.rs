#![allow(missing_docs)] // variants are named after the schema tokens
//! Enumerated text values of the schema

use xml_bind::text_enum;

text_enum! {
	/// Sport of an activity or workout
	pub enum Sport {
		Running = "Running",
		Biking = "Biking",
		Other = "Other",
	}
}

text_enum! {
	/// Lap intensity
	pub enum Intensity {
		Active = "Active",
		Resting = "Resting",
	}
}

text_enum! {
	/// What ended a lap
	pub enum TriggerMethod {
		Manual = "Manual",
		Distance = "Distance",
		Location = "Location",
		Time = "Time",
		HeartRate = "HeartRate",
	}
}

text_enum! {
	/// Whether the sensor was connected when the trackpoint was recorded
	pub enum SensorState {
		Present = "Present",
		Absent = "Absent",
	}
}

text_enum! {
	/// Source of cadence data in trackpoint extensions
	pub enum CadenceSensorType {
		Footpod = "Footpod",
		Bike = "Bike",
	}
}

text_enum! {
	/// Unit speed zones are presented in
	pub enum SpeedType {
		Pace = "Pace",
		Speed = "Speed",
	}
}

text_enum! {
	/// Kind of training plan
	pub enum TrainingType {
		Workout = "Workout",
		Course = "Course",
	}
}

text_enum! {
	/// Release type of a software build
	pub enum BuildType {
		Internal = "Internal",
		Alpha = "Alpha",
		Beta = "Beta",
		Release = "Release",
	}
}

text_enum! {
	/// Kind of a course point
	pub enum CoursePointType {
		Generic = "Generic",
		Summit = "Summit",
		Valley = "Valley",
		Water = "Water",
		Food = "Food",
		Danger = "Danger",
		Left = "Left",
		Right = "Right",
		Straight = "Straight",
		FirstAid = "First Aid",
		FourthCategory = "4th Category",
		ThirdCategory = "3rd Category",
		SecondCategory = "2nd Category",
		FirstCategory = "1st Category",
		HorsCategory = "Hors Category",
		Sprint = "Sprint",
	}
}

#[cfg(test)]
mod test {
	use super::*;
	use xml_bind::TextValue;

	#[test]
	fn tokens_with_spaces() {
		assert_eq!(CoursePointType::parse_text("4th Category"), Ok(CoursePointType::FourthCategory));
		assert_eq!(CoursePointType::FirstAid.as_str(), "First Aid");
		assert_eq!(CoursePointType::ALL.len(), 16);
	}

	#[test]
	fn unknown_token() {
		assert!(TriggerMethod::parse_text("Lap").is_err());
		assert_eq!(TriggerMethod::parse_text(" Manual\n"), Ok(TriggerMethod::Manual));
	}
}
