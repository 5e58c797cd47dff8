//! The compiled-in column set of the cluster intent registry.
//!
//! Field order here is the exact header order the file must carry.

use super::types::{Check, FieldKind, FieldSpec, Presence};

/// Locations a cluster may be placed in.
pub const ALLOWED_LOCATIONS: &[&str] = &["us-central1", "us-west1", "europe-west1"];

const fn length(min: usize, max: usize) -> Check {
    Check::Length {
        min,
        max: Some(max),
    }
}

const LEN_20: Check = length(1, 20);
const LEN_50: Check = length(1, 50);
const LEN_100: Check = length(1, 100);
const LEN_200: Check = length(1, 200);
const NON_EMPTY: Check = Check::Length { min: 1, max: None };
const LOCATION: Check = Check::OneOf {
    label: "location",
    allowed: ALLOWED_LOCATIONS,
};

pub static REGISTRY_FIELDS: [FieldSpec; 24] = [
    FieldSpec::required_text("store_id", &[LEN_20]),
    FieldSpec::required_text("zone_name", &[LEN_50]),
    FieldSpec::required_text("machine_project_id", &[LEN_50]),
    FieldSpec::required_text("fleet_project_id", &[LEN_50]),
    FieldSpec::required_text("cluster_name", &[LEN_50]),
    FieldSpec::required_text("location", &[LEN_50, LOCATION]),
    FieldSpec {
        name: "node_count",
        presence: Presence::Required,
        kind: FieldKind::Integer { min: 0 },
        checks: &[],
    },
    FieldSpec::required_text("cluster_ipv4_cidr", &[Check::Ipv4Cidr]),
    FieldSpec::required_text("services_ipv4_cidr", &[Check::Ipv4Cidr]),
    FieldSpec::required_text(
        "external_load_balancer_ipv4_address_pools",
        &[Check::Ipv4AddressPools],
    ),
    FieldSpec::required_text("sync_repo", &[LEN_200, Check::HttpsUrl]),
    FieldSpec::required_text("sync_branch", &[LEN_50]),
    FieldSpec::required_text("sync_dir", &[LEN_100]),
    FieldSpec::required_text("secrets_project_id", &[LEN_50]),
    FieldSpec::required_text("git_token_secrets_manager_name", &[LEN_50]),
    FieldSpec::required_text("cluster_version", &[LEN_20]),
    FieldSpec::optional_text("maintenance_window_start", &[Check::TimeOfDay]),
    FieldSpec::optional_text("maintenance_window_end", &[Check::TimeOfDay]),
    FieldSpec::optional_text("maintenance_window_recurrence", &[LEN_50]),
    FieldSpec::optional_text("maintenance_exclusion_name_1", &[LEN_50]),
    FieldSpec::optional_text("maintenance_exclusion_start_1", &[Check::CalendarDate]),
    FieldSpec::optional_text("maintenance_exclusion_end_1", &[Check::CalendarDate]),
    FieldSpec::required_text("subnet_vlans", &[NON_EMPTY]),
    FieldSpec {
        name: "recreate_on_delete",
        presence: Presence::Required,
        kind: FieldKind::Boolean,
        checks: &[],
    },
];

/// The header the registry file must start with, in order.
pub fn expected_header() -> Vec<&'static str> {
    REGISTRY_FIELDS.iter().map(|f| f.name).collect()
}

pub fn field_spec(name: &str) -> Option<&'static FieldSpec> {
    REGISTRY_FIELDS.iter().find(|f| f.name == name)
}
