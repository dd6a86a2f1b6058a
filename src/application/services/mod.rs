//! 应用服务

pub mod inventory_service;

pub use inventory_service::InventoryService;
