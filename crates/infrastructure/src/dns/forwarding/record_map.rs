//! Conversion from `hickory_proto` records to the monitor's `ResourceRecord`.

use dns_monitor_domain::ResourceRecord;
use hickory_proto::rr::{RData, Record};
use std::net::IpAddr;

pub struct RecordMapper;

impl RecordMapper {
    pub fn to_resource_record(record: &Record) -> ResourceRecord {
        let name = record.name().to_utf8();

        match record.data() {
            RData::A(a) => ResourceRecord::address(&name, IpAddr::V4(a.0)),
            RData::AAAA(aaaa) => ResourceRecord::address(&name, IpAddr::V6(aaaa.0)),
            RData::CNAME(canonical) => ResourceRecord::cname(&name, &canonical.to_utf8()),
            RData::NS(ns) => ResourceRecord::ns(&name, &ns.to_utf8()),
            _ => ResourceRecord::other(&name),
        }
    }

    pub fn to_resource_records(records: &[Record]) -> Vec<ResourceRecord> {
        records.iter().map(Self::to_resource_record).collect()
    }
}
