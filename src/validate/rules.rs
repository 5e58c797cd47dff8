//! Single-value checks. Each returns the human-readable reason on failure.

use chrono::{NaiveDate, NaiveTime};
use ipnetwork::{ipv4_mask_to_prefix, Ipv4Network};
use once_cell::sync::Lazy;
use regex::Regex;
use std::net::Ipv4Addr;

use crate::schema::Check;

static TIME_OF_DAY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{2}:\d{2}$").expect("static time regex"));
static CALENDAR_DATE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("static date regex"));

/// Run one schema check against a present value.
pub fn apply(check: &Check, value: &str) -> Result<(), String> {
    match check {
        Check::Length { min, max } => check_length(value, *min, *max),
        Check::Ipv4Cidr => parse_ipv4_cidr(value).map(|_| ()),
        Check::Ipv4AddressPools => check_address_pools(value),
        Check::HttpsUrl => check_https_url(value),
        Check::TimeOfDay => check_time_of_day(value),
        Check::CalendarDate => check_calendar_date(value),
        Check::OneOf { label, allowed } => check_one_of(label, value, allowed),
    }
}

pub fn check_length(value: &str, min: usize, max: Option<usize>) -> Result<(), String> {
    let len = value.chars().count();
    if len < min {
        let unit = if min == 1 { "character" } else { "characters" };
        return Err(format!("String should have at least {} {}", min, unit));
    }
    match max {
        Some(max) if len > max => Err(format!(
            "String should have at most {} characters, got {}",
            max, len
        )),
        _ => Ok(()),
    }
}

/// Parse `addr`, `addr/prefix`, `addr/netmask` or `addr/hostmask`.
/// A bare address is a /32. Host bits may be set.
pub fn parse_ipv4_cidr(value: &str) -> Result<Ipv4Network, String> {
    let invalid = || format!("Invalid IPv4 CIDR: {}", value);
    let (addr, prefix) = match value.split_once('/') {
        Some((addr, raw)) => (addr, parse_prefix(raw).ok_or_else(invalid)?),
        None => (value, 32),
    };
    let addr: Ipv4Addr = addr.parse().map_err(|_| invalid())?;
    Ipv4Network::new(addr, prefix).map_err(|_| invalid())
}

/// Decimal prefix length, else a netmask, else a hostmask (inverted netmask).
fn parse_prefix(raw: &str) -> Option<u8> {
    if !raw.is_empty() && raw.bytes().all(|b| b.is_ascii_digit()) {
        return raw.parse::<u8>().ok().filter(|p| *p <= 32);
    }
    let mask: Ipv4Addr = raw.parse().ok()?;
    ipv4_mask_to_prefix(mask)
        .or_else(|_| ipv4_mask_to_prefix(Ipv4Addr::from(!u32::from(mask))))
        .ok()
}

/// A pool side is an address or a network with no host bits set.
fn parse_pool_bound(value: &str) -> Option<Ipv4Network> {
    let net = parse_ipv4_cidr(value).ok()?;
    (net.ip() == net.network()).then_some(net)
}

/// `start-end[,start-end...]`
pub fn check_address_pools(value: &str) -> Result<(), String> {
    for pool in value.split(',') {
        let bounds: Vec<&str> = pool.split('-').collect();
        if bounds.len() != 2 {
            return Err(format!("Invalid IP address pool format: {}", value));
        }
        if bounds.iter().any(|b| parse_pool_bound(b).is_none()) {
            return Err(format!("Invalid IP address in pool: {}", value));
        }
    }
    Ok(())
}

pub fn check_https_url(value: &str) -> Result<(), String> {
    if value.starts_with("https://") {
        Ok(())
    } else {
        Err(format!("Invalid URL format: {}", value))
    }
}

/// Zero-padded 24-hour `HH:MM`.
pub fn check_time_of_day(value: &str) -> Result<(), String> {
    if TIME_OF_DAY.is_match(value) && NaiveTime::parse_from_str(value, "%H:%M").is_ok() {
        Ok(())
    } else {
        Err(format!("Invalid time format. Expected HH:MM: {}", value))
    }
}

/// `YYYY-MM-DD` naming a real day.
pub fn check_calendar_date(value: &str) -> Result<(), String> {
    if CALENDAR_DATE.is_match(value) && NaiveDate::parse_from_str(value, "%Y-%m-%d").is_ok() {
        Ok(())
    } else {
        Err(format!("Invalid date format. Expected YYYY-MM-DD: {}", value))
    }
}

pub fn check_one_of(label: &str, value: &str, allowed: &[&str]) -> Result<(), String> {
    if allowed.contains(&value) {
        Ok(())
    } else {
        Err(format!(
            "Invalid {}: {}. Allowed values are [{}]",
            label,
            value,
            allowed.join(", ")
        ))
    }
}

pub fn parse_integer(value: &str, min: i64) -> Result<i64, String> {
    let n: i64 = value
        .trim()
        .parse()
        .map_err(|_| format!("Input should be a valid integer, got {}", value))?;
    if n < min {
        return Err(format!(
            "Input should be greater than or equal to {}, got {}",
            min, n
        ));
    }
    Ok(n)
}

pub fn parse_boolean(value: &str) -> Result<bool, String> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "t" | "yes" | "y" | "on" | "1" => Ok(true),
        "false" | "f" | "no" | "n" | "off" | "0" => Ok(false),
        _ => Err(format!("Input should be a valid boolean, got {}", value)),
    }
}
