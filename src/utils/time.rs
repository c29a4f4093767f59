//! Korea Standard Time helpers for report stamps

use chrono::{DateTime, FixedOffset, Offset, Utc};

const KST_OFFSET_SECONDS: i32 = 9 * 3600;

pub fn kst() -> FixedOffset {
    FixedOffset::east_opt(KST_OFFSET_SECONDS).unwrap_or_else(|| Utc.fix())
}

pub fn kst_now() -> DateTime<FixedOffset> {
    to_kst(Utc::now())
}

pub fn to_kst(dt: DateTime<Utc>) -> DateTime<FixedOffset> {
    dt.with_timezone(&kst())
}

/// `2024-03-01 08:30:00 KST`
pub fn format_kst_timestamp(dt: &DateTime<FixedOffset>) -> String {
    dt.format("%Y-%m-%d %H:%M:%S KST").to_string()
}

/// `daily_report_20240301_0830`
pub fn report_filename(dt: &DateTime<FixedOffset>) -> String {
    dt.format("daily_report_%Y%m%d_%H%M").to_string()
}
