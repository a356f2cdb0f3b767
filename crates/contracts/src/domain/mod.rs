pub mod a001_project;
pub mod a002_product;
pub mod a003_work_stage;
