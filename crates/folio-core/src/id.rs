//! Entity id synthesis.
//!
//! All entity ids are opaque strings of the form `<prefix>_<millis>`. A
//! draft has no id until its first successful save; the console synthesises
//! one immediately before the create call.

use std::collections::HashSet;

use chrono::Utc;

/// Synthesise a fresh `<prefix>_<creation-timestamp>` id, unique among
/// `taken`. Two saves inside the same millisecond bump the stamp rather
/// than collide.
pub fn synthesize<'a, I>(prefix: &str, taken: I) -> String
where
  I: IntoIterator<Item = &'a str>,
{
  let taken: HashSet<&str> = taken.into_iter().collect();
  let mut stamp = Utc::now().timestamp_millis();
  loop {
    let candidate = format!("{prefix}_{stamp}");
    if !taken.contains(candidate.as_str()) {
      return candidate;
    }
    stamp += 1;
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn id_carries_prefix_and_timestamp() {
    let id = synthesize("proj", []);
    let (prefix, stamp) = id.split_once('_').expect("separator");
    assert_eq!(prefix, "proj");
    assert!(stamp.parse::<i64>().is_ok());
  }

  #[test]
  fn collisions_bump_until_unique() {
    let first = synthesize("writ", []);
    let second = synthesize("writ", [first.as_str()]);
    assert_ne!(first, second);
  }

  #[test]
  fn many_ids_stay_unique_within_a_collection() {
    let mut taken: Vec<String> = Vec::new();
    for _ in 0..50 {
      let id = synthesize("ep", taken.iter().map(String::as_str));
      assert!(!taken.contains(&id));
      taken.push(id);
    }
  }
}
