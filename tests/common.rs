#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use nukistats::models::{LogRow, LogTable};
use std::env;
use std::fs;
use std::path::PathBuf;

/// Four entries, newest first, two per UTC day, three distinct names once
/// the empty name falls back to its trigger. The extra `deviceType` column
/// sits between required ones.
pub const SAMPLE: &str = "date\tname\tdeviceType\taction\ttrigger\tstate\tautoUnlock\r\n\
2025-01-31T18:10:00.000Z\tAnna\tsmartlock\tUnlock\tApp\tunlocked\tfalse\r\n\
2025-01-31T07:05:00.000Z\t\tsmartlock\tUnlock\tKeypad\tunlocked\tfalse\r\n\
2025-01-30T23:30:00.000Z\tMarco\tsmartlock\tLock\tManual\tlocked\tfalse\r\n\
2025-01-30T12:00:00.000Z\tAnna\tsmartlock\tUnlock\tApp\tunlocked\ttrue\r\n";

pub fn nks() -> Command {
    cargo_bin_cmd!("nukistats")
}

/// UTF-16LE with byte order mark, as the lock's app exports it
pub fn utf16le(text: &str) -> Vec<u8> {
    let mut out = vec![0xFF, 0xFE];
    for unit in text.encode_utf16() {
        out.extend_from_slice(&unit.to_le_bytes());
    }
    out
}

/// Unique path inside the system temp dir, removed if left over
pub fn temp_path(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_nukistats.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Write `text` as a UTF-16 export and return its path
pub fn write_export(name: &str, text: &str) -> String {
    let path = temp_path(name, "csv");
    fs::write(&path, utf16le(text)).expect("write export");
    path
}

/// Config file with colors off, so output can be matched literally
pub fn plain_config(name: &str, timezone: &str) -> String {
    let path = temp_path(name, "conf");
    fs::write(
        &path,
        format!("timezone: {timezone}\ncolor: false\nbar_width: 10\n"),
    )
    .expect("write config");
    path
}

pub fn row(date: &str, name: &str, action: &str, trigger: &str, state: &str) -> LogRow {
    LogRow {
        date: date.to_string(),
        name: name.to_string(),
        action: action.to_string(),
        trigger: trigger.to_string(),
        state: state.to_string(),
        auto_unlock: "false".to_string(),
    }
}

pub fn sample_table() -> LogTable {
    nukistats::core::ingest(&utf16le(SAMPLE)).expect("ingest sample")
}
