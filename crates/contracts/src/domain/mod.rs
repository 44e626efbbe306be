pub mod departments;
