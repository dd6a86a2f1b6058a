//! 清单构建服务
//!
//! 两遍扫描同一批记录：
//! 1. 分组：app+env / app / env / type+env
//! 2. hostvars：每台主机上运行的全部域
//!
//! 两遍各自计算报表域的环境重映射。

use crate::domain::error::Result;
use crate::domain::models::{DomainEntry, DomainRecord, Inventory};
use crate::domain::repositories::DomainSource;
use std::sync::Arc;

/// 清单构建服务
pub struct InventoryService {
    source: Arc<dyn DomainSource>,
}

impl InventoryService {
    pub fn new(source: Arc<dyn DomainSource>) -> Self {
        Self { source }
    }

    /// 读取数据源并构建完整清单
    ///
    /// # Errors
    ///
    /// 数据源不可读或记录格式错误时返回错误，不产生部分结果。
    pub fn build(&self) -> Result<Inventory> {
        let records = self.source.load()?;
        tracing::debug!(records = records.len(), "loaded domain records");

        let mut inventory = Inventory::empty();
        Self::build_groups(&mut inventory, &records);
        Self::build_hostvars(&mut inventory, &records);

        tracing::debug!(
            groups = inventory.groups.len(),
            hosts = inventory.meta.hostvars.len(),
            "inventory built"
        );
        Ok(inventory)
    }

    /// `--host` 或无参数时返回的空清单
    #[must_use]
    pub fn empty(&self) -> Inventory {
        Inventory::empty()
    }

    /// 第一遍：分组成员
    fn build_groups(inventory: &mut Inventory, records: &[DomainRecord]) {
        for record in records {
            let env = record.effective_env();
            let app_env = format!("{}{}", record.app, env);
            let type_env = format!("{}{}", record.kind, env);

            for group in [app_env.as_str(), record.app.as_str(), env, type_env.as_str()] {
                if inventory.add_to_group(group, &record.host) {
                    tracing::trace!(group, host = %record.host, "host added to group");
                }
            }
        }
    }

    /// 第二遍：主机变量
    fn build_hostvars(inventory: &mut Inventory, records: &[DomainRecord]) {
        for record in records {
            inventory.add_domain(&record.host, DomainEntry::from(record));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::error::DomainError;
    use crate::domain::repositories::InMemorySource;
    use std::path::PathBuf;

    fn service(lines: &[&str]) -> InventoryService {
        let records = lines
            .iter()
            .enumerate()
            .map(|(i, line)| DomainRecord::parse_line(line, i + 2).unwrap())
            .collect();
        InventoryService::new(Arc::new(InMemorySource::new(records)))
    }

    fn hosts<'a>(inv: &'a Inventory, group: &str) -> Vec<&'a str> {
        inv.groups[group].hosts.iter().collect()
    }

    struct FailingSource;

    impl DomainSource for FailingSource {
        fn load(&self) -> Result<Vec<DomainRecord>> {
            Err(DomainError::InputUnavailable {
                path: PathBuf::from("domain.list"),
                reason: "gone".to_string(),
            })
        }
    }

    #[test]
    fn test_single_record() {
        let inv = service(&["domA app cs dev N main srvA hostA 8.5 PT8.60\n"])
            .build()
            .unwrap();

        assert_eq!(
            inv.group_names().collect::<Vec<_>>(),
            vec!["appdev", "cs", "csdev", "dev"]
        );
        for group in ["csdev", "cs", "dev", "appdev"] {
            assert_eq!(hosts(&inv, group), vec!["hostA"]);
        }

        let domains = &inv.meta.hostvars["hostA"].domains;
        assert_eq!(domains.len(), 1);
        assert_eq!(domains[0].server_name, "srvA");
        assert_eq!(domains[0].weblogic_ver, "PT8.60");
    }

    #[test]
    fn test_same_app_env_host_listed_once() {
        let inv = service(&[
            "d1 web cs dev N main s1 h1 8.5 12",
            "d2 app cs dev N main s2 h1 8.5 12",
            "d3 app cs dev N main s3 h2 8.5 12",
        ])
        .build()
        .unwrap();

        assert_eq!(hosts(&inv, "csdev"), vec!["h1", "h2"]);
        assert_eq!(hosts(&inv, "webdev"), vec!["h1"]);
        assert_eq!(hosts(&inv, "appdev"), vec!["h1", "h2"]);
    }

    #[test]
    fn test_reporting_remap_applies_to_groups_and_hostvars() {
        let inv = service(&[
            "q1 prc cs qat Y rpt s1 h1 8.5 12",
            "p1 prc cs prd Y rpt s2 h2 8.5 12",
            "p2 prc cs prd N main s3 h3 8.5 12",
        ])
        .build()
        .unwrap();

        assert_eq!(hosts(&inv, "csqrpt"), vec!["h1"]);
        assert_eq!(hosts(&inv, "qrpt"), vec!["h1"]);
        assert_eq!(hosts(&inv, "prcqrpt"), vec!["h1"]);
        assert_eq!(hosts(&inv, "csrpt"), vec!["h2"]);
        assert_eq!(hosts(&inv, "rpt"), vec!["h2"]);
        assert_eq!(hosts(&inv, "csprd"), vec!["h3"]);
        assert!(!inv.groups.contains_key("csqat"));
        assert!(!inv.groups.contains_key("qat"));

        assert_eq!(inv.meta.hostvars["h1"].domains[0].env, "qrpt");
        assert_eq!(inv.meta.hostvars["h2"].domains[0].env, "rpt");
        assert_eq!(inv.meta.hostvars["h3"].domains[0].env, "prd");
    }

    #[test]
    fn test_host_domains_keep_input_order_and_duplicates() {
        let inv = service(&[
            "d1 web cs dev N main s1 h1 8.5 12",
            "d2 app hr tst N main s2 h2 8.5 12",
            "d1 web cs dev N main s1 h1 8.5 12",
            "d3 prc fs prd N main s3 h1 8.5 12",
        ])
        .build()
        .unwrap();

        let names: Vec<_> = inv.meta.hostvars["h1"]
            .domains
            .iter()
            .map(|d| d.name.as_str())
            .collect();
        assert_eq!(names, vec!["d1", "d1", "d3"]);
        assert_eq!(hosts(&inv, "cs"), vec!["h1"]);
    }

    #[test]
    fn test_grouped_hosts_match_hostvars() {
        let inv = service(&[
            "d1 web cs dev N main s1 h1 8.5 12",
            "d2 app hr tst N main s2 h2 8.5 12",
            "d3 prc fs prd Y main s3 h3 8.5 12",
        ])
        .build()
        .unwrap();

        let mut grouped: Vec<&str> = inv
            .groups
            .values()
            .flat_map(|g| g.hosts.iter())
            .collect();
        grouped.sort_unstable();
        grouped.dedup();

        assert_eq!(grouped, inv.host_names().collect::<Vec<_>>());
    }

    #[test]
    fn test_no_records_yields_empty_inventory() {
        let inv = service(&[]).build().unwrap();
        assert_eq!(inv, Inventory::empty());
    }

    #[test]
    fn test_source_error_propagates() {
        let svc = InventoryService::new(Arc::new(FailingSource));
        assert!(matches!(
            svc.build(),
            Err(DomainError::InputUnavailable { .. })
        ));
    }
}
