pub mod index;
pub mod page;
pub mod summary;
pub mod table;

pub use index::DepartmentIndex;
pub use page::DepartmentPage;
