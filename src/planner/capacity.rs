//! Group sizing.
//!
//! Students of a term are split into groups of at most one room's
//! capacity. A term always plans at least one group.

/// Students per group (one room per group).
pub const ROOM_CAPACITY: u32 = 35;

/// Number of groups needed for `student_count` students.
///
/// Returns `ceil(student_count / ROOM_CAPACITY)`, never less than 1.
/// Zero or negative counts are treated as one student.
pub fn compute_groups(student_count: i32) -> u32 {
    let students = student_count.max(1) as u32;
    students.div_ceil(ROOM_CAPACITY)
}

/// Labels for the groups of a term: `"{term}A"`, `"{term}B"`, ...
///
/// Past `Z` the suffix continues as `AA`, `AB`, ...
pub fn group_labels(term_number: u8, group_count: u32) -> Vec<String> {
    (0..group_count)
        .map(|i| format!("{term_number}{}", letter_suffix(i)))
        .collect()
}

/// Term number encoded in a group label built by [`group_labels`].
///
/// `"3B"` is term 3 and `"9AA"` is term 9. Labels without leading
/// digits, without a letter suffix, or with anything but uppercase
/// letters after the digits yield `None`.
pub fn term_of_group(label: &str) -> Option<u8> {
    let label = label.trim();
    let split = label.find(|c: char| !c.is_ascii_digit())?;
    let (digits, suffix) = label.split_at(split);
    if digits.is_empty() || !suffix.bytes().all(|b| b.is_ascii_uppercase()) {
        return None;
    }
    digits.parse().ok()
}

/// Spreadsheet-style column name for a zero-based index.
fn letter_suffix(index: u32) -> String {
    let mut n = index + 1;
    let mut out = Vec::new();
    while n > 0 {
        let rem = (n - 1) % 26;
        out.push(b'A' + rem as u8);
        n = (n - 1) / 26;
    }
    out.reverse();
    String::from_utf8_lossy(&out).into_owned()
}
