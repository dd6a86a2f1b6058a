//! 领域实体

pub mod domain_record;
pub mod inventory;

pub use domain_record::DomainRecord;
pub use inventory::{DomainEntry, Group, HostList, HostVars, Inventory, Meta};
