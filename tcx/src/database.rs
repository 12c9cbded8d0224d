//! Document root and folder structure

use crate::{
	activity::{
		Activity,
		MultiSportSession,
	},
	course::Course,
	extensions::Extensions,
	source::AbstractSource,
	workout::Workout,
	ACTIVITY_EXTENSION_NS,
	ACTIVITY_GOALS_NS,
	PROFILE_EXTENSION_NS,
	SCHEMA_LOCATION,
	TCX_NS,
	USER_PROFILE_NS,
};
use chrono::{
	DateTime,
	NaiveDate,
	Utc,
};
use xml_bind::{
	Node,
	Root,
};

/// `<TrainingCenterDatabase>`
#[allow(missing_docs)]
#[derive(Node)]
#[derive(Clone, PartialEq, Debug, Default)]
#[xml_bind(name = "TrainingCenterDatabase_t")]
pub struct Database {
	pub folders: Option<Folders>,
	pub activities: Option<ActivityList>,
	pub workouts: Option<WorkoutList>,
	pub courses: Option<CourseList>,
	pub author: Option<AbstractSource>,
	pub extensions: Option<Extensions>,
}

impl Root for Database {
	const TAG: &'static str = "TrainingCenterDatabase";
	const NAMESPACE: &'static str = TCX_NS;
	const SCHEMA_LOCATION: Option<&'static str> = Some(SCHEMA_LOCATION);
	const NAMESPACES: &'static [(&'static str, &'static str)] = &[
		("ns2", USER_PROFILE_NS),
		("ns3", ACTIVITY_EXTENSION_NS),
		("ns4", PROFILE_EXTENSION_NS),
		("ns5", ACTIVITY_GOALS_NS),
	];
}

impl Database {
	/// Recorded activities
	pub fn activities(&self) -> &[Activity] {
		match &self.activities {
			Some(list) => &list.activities,
			None => &[],
		}
	}

	/// Planned workouts
	pub fn workouts(&self) -> &[Workout] {
		match &self.workouts {
			Some(list) => &list.workouts,
			None => &[],
		}
	}

	/// Courses
	pub fn courses(&self) -> &[Course] {
		match &self.courses {
			Some(list) => &list.courses,
			None => &[],
		}
	}
}

#[allow(missing_docs)]
#[derive(Node)]
#[derive(Clone, PartialEq, Debug, Default)]
pub struct ActivityList {
	#[xml_bind(tag = "Activity")]
	pub activities: Vec<Activity>,
	#[xml_bind(tag = "MultiSportSession")]
	pub multi_sport_sessions: Vec<MultiSportSession>,
}

#[allow(missing_docs)]
#[derive(Node)]
#[derive(Clone, PartialEq, Debug, Default)]
pub struct WorkoutList {
	#[xml_bind(tag = "Workout")]
	pub workouts: Vec<Workout>,
}

#[allow(missing_docs)]
#[derive(Node)]
#[derive(Clone, PartialEq, Debug, Default)]
pub struct CourseList {
	#[xml_bind(tag = "Course")]
	pub courses: Vec<Course>,
}

/// Organization of activities, workouts and courses
#[allow(missing_docs)]
#[derive(Node)]
#[derive(Clone, PartialEq, Debug, Default)]
pub struct Folders {
	pub history: Option<History>,
	pub workouts: Option<WorkoutFolders>,
	pub courses: Option<CourseFolders>,
}

#[allow(missing_docs)]
#[derive(Node)]
#[derive(Clone, PartialEq, Debug, Default)]
pub struct History {
	pub running: Option<HistoryFolder>,
	pub biking: Option<HistoryFolder>,
	pub other: Option<HistoryFolder>,
	pub multi_sport: Option<MultiSportFolder>,
	pub extensions: Option<Extensions>,
}

#[allow(missing_docs)]
#[derive(Node)]
#[derive(Clone, PartialEq, Debug, Default)]
pub struct HistoryFolder {
	#[xml_bind(attr)]
	pub name: Option<String>,
	#[xml_bind(tag = "Folder")]
	pub folders: Vec<HistoryFolder>,
	#[xml_bind(tag = "ActivityRef")]
	pub activity_refs: Vec<ActivityReference>,
	#[xml_bind(tag = "Week")]
	pub weeks: Vec<Week>,
	pub notes: Option<String>,
	pub extensions: Option<Extensions>,
}

#[allow(missing_docs)]
#[derive(Node)]
#[derive(Clone, PartialEq, Debug, Default)]
pub struct MultiSportFolder {
	#[xml_bind(attr)]
	pub name: Option<String>,
	#[xml_bind(tag = "Folder")]
	pub folders: Vec<MultiSportFolder>,
	#[xml_bind(tag = "MultisportActivityRef")]
	pub activity_refs: Vec<ActivityReference>,
	#[xml_bind(tag = "Week")]
	pub weeks: Vec<Week>,
	pub notes: Option<String>,
	pub extensions: Option<Extensions>,
}

#[allow(missing_docs)]
#[derive(Node)]
#[derive(Clone, PartialEq, Debug, Default)]
pub struct Week {
	#[xml_bind(attr)]
	pub start_day: Option<NaiveDate>,
	pub notes: Option<String>,
}

/// Reference to an activity by its id
#[allow(missing_docs)]
#[derive(Node)]
#[derive(Clone, PartialEq, Debug)]
pub struct ActivityReference {
	pub id: DateTime<Utc>,
}

#[allow(missing_docs)]
#[derive(Node)]
#[derive(Clone, PartialEq, Debug, Default)]
#[xml_bind(name = "Workouts_t")]
pub struct WorkoutFolders {
	pub running: Option<WorkoutFolder>,
	pub biking: Option<WorkoutFolder>,
	pub other: Option<WorkoutFolder>,
	pub extensions: Option<Extensions>,
}

#[allow(missing_docs)]
#[derive(Node)]
#[derive(Clone, PartialEq, Debug, Default)]
pub struct WorkoutFolder {
	#[xml_bind(attr)]
	pub name: Option<String>,
	#[xml_bind(tag = "Folder")]
	pub folders: Vec<WorkoutFolder>,
	#[xml_bind(tag = "WorkoutNameRef")]
	pub workout_name_refs: Vec<NameKeyReference>,
	pub extensions: Option<Extensions>,
}

#[allow(missing_docs)]
#[derive(Node)]
#[derive(Clone, PartialEq, Debug, Default)]
#[xml_bind(name = "Courses_t")]
pub struct CourseFolders {
	pub course_folder: Option<CourseFolder>,
	pub extensions: Option<Extensions>,
}

#[allow(missing_docs)]
#[derive(Node)]
#[derive(Clone, PartialEq, Debug, Default)]
pub struct CourseFolder {
	#[xml_bind(attr)]
	pub name: Option<String>,
	#[xml_bind(tag = "Folder")]
	pub folders: Vec<CourseFolder>,
	#[xml_bind(tag = "CourseNameRef")]
	pub course_name_refs: Vec<NameKeyReference>,
	pub notes: Option<String>,
	pub extensions: Option<Extensions>,
}

/// Reference to a workout or course by name
#[allow(missing_docs)]
#[derive(Node)]
#[derive(Clone, PartialEq, Debug, Default)]
pub struct NameKeyReference {
	pub id: String,
}
