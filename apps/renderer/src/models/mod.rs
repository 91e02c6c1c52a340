pub mod cv;

pub use cv::{CvRecord, Education, Experience, PersonalInfo, Skill};
