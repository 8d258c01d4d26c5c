pub mod collision;
pub mod counters;
pub mod health;
pub mod kinematics;
