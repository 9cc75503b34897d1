//! Bounded, ordered subsystem collections.

use crate::config::Config;
use crate::error::{CoreError, CoreResult};
use crate::filter::FilterPattern;
use crate::subsystem::Subsystem;
use tracing::debug;

/// An ordered collection of subsystem records with a capacity ceiling.
///
/// Records are stored by value in insertion order. Removal compacts the
/// live range by shifting later records left, so indices are ephemeral:
/// an index returned by [`find`](Self::find) is valid only until the
/// next mutating call.
#[derive(Debug, Clone)]
pub struct SubsystemCollection {
    /// Live records, insertion-ordered. Never longer than `capacity`.
    subsystems: Vec<Subsystem>,
    /// Capacity ceiling.
    capacity: usize,
}

impl Default for SubsystemCollection {
    fn default() -> Self {
        Self::new()
    }
}

impl SubsystemCollection {
    /// Creates an empty collection with the default capacity ceiling.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    /// Creates an empty collection from a configuration.
    #[must_use]
    pub fn with_config(config: Config) -> Self {
        Self {
            subsystems: Vec::new(),
            capacity: config.max_subsystems,
        }
    }

    /// Number of live records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.subsystems.len()
    }

    /// True if the collection holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.subsystems.is_empty()
    }

    /// Capacity ceiling.
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Record at `index`, if within the live range.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Subsystem> {
        self.subsystems.get(index)
    }

    /// Mutable record at `index`, if within the live range.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut Subsystem> {
        self.subsystems.get_mut(index)
    }

    /// Iterates over the live records in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Subsystem> {
        self.subsystems.iter()
    }

    /// Appends a record to the tail slot.
    ///
    /// The record is stored by value; the collection never aliases
    /// caller-held records. Fails with [`CoreError::CapacityExceeded`]
    /// at the ceiling. Duplicate names are not rejected here: uniqueness
    /// is the caller's lookup-before-insert duty.
    pub fn append(&mut self, subsystem: Subsystem) -> CoreResult<()> {
        if self.subsystems.len() >= self.capacity {
            return Err(CoreError::CapacityExceeded {
                capacity: self.capacity,
            });
        }
        debug!(name = %subsystem.name(), len = self.subsystems.len() + 1, "subsystem appended");
        self.subsystems.push(subsystem);
        Ok(())
    }

    /// Index of the first record with the given name.
    ///
    /// Linear scan in insertion order. The returned index is ephemeral:
    /// valid only until the next mutating call.
    pub fn find(&self, name: &str) -> CoreResult<usize> {
        self.subsystems
            .iter()
            .position(|subsystem| subsystem.name() == name)
            .ok_or_else(|| CoreError::not_found(name))
    }

    /// True if a record with the given name exists.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.find(name).is_ok()
    }

    /// Removes the record at `index`, returning it.
    ///
    /// Later records shift one position left, preserving insertion
    /// order. Fails with [`CoreError::IndexOutOfRange`] outside the live
    /// range, leaving the collection unchanged. O(len) per removal.
    pub fn remove(&mut self, index: usize) -> CoreResult<Subsystem> {
        if index >= self.subsystems.len() {
            return Err(CoreError::IndexOutOfRange {
                index,
                len: self.subsystems.len(),
            });
        }
        let removed = self.subsystems.remove(index);
        debug!(name = %removed.name(), len = self.subsystems.len(), "subsystem removed");
        Ok(removed)
    }

    /// Renders every record in order, one line each.
    ///
    /// Fails with [`CoreError::EmptyCollection`] when there is nothing
    /// to render. Each record renders via the consuming formatter, so a
    /// pending payload is shown once and cleared.
    pub fn render_all(&mut self) -> CoreResult<String> {
        if self.subsystems.is_empty() {
            return Err(CoreError::EmptyCollection);
        }
        let mut out = String::new();
        for subsystem in &mut self.subsystems {
            out.push_str(&subsystem.render());
            out.push('\n');
        }
        Ok(out)
    }

    /// Filters matching records into a caller-supplied destination.
    ///
    /// The destination is reset to empty first, then every source record
    /// whose status satisfies the pattern is cloned in, in source order.
    /// Fails with [`CoreError::CapacityExceeded`] if the destination
    /// fills before filtering completes; matches appended up to that
    /// point remain (no rollback). The source is never mutated.
    pub fn filter_into(
        &self,
        pattern: &FilterPattern,
        dest: &mut SubsystemCollection,
    ) -> CoreResult<()> {
        dest.subsystems.clear();
        for subsystem in &self.subsystems {
            if pattern.matches(subsystem.status()) {
                dest.append(subsystem.clone())?;
            }
        }
        Ok(())
    }

    /// Filters matching records into a fresh collection.
    ///
    /// The destination gets the same capacity ceiling as the source, so
    /// it cannot overflow; this is the common path for callers that do
    /// not manage their own destination.
    pub fn filter(&self, pattern: &FilterPattern) -> CoreResult<SubsystemCollection> {
        let mut dest = Self {
            subsystems: Vec::new(),
            capacity: self.capacity,
        };
        self.filter_into(pattern, &mut dest)?;
        Ok(dest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::status::Status;

    fn named(name: &str) -> Subsystem {
        Subsystem::new(name, Status::default())
    }

    fn with_status(name: &str, bits: u8) -> Subsystem {
        Subsystem::new(name, Status::from_bits(bits))
    }

    #[test]
    fn append_until_capacity() {
        let mut collection = SubsystemCollection::with_config(Config::new().max_subsystems(3));
        for i in 0..3 {
            collection.append(named(&format!("sub{i}"))).unwrap();
        }
        assert_eq!(collection.len(), 3);

        let err = collection.append(named("overflow")).unwrap_err();
        assert_eq!(err, CoreError::CapacityExceeded { capacity: 3 });
        assert_eq!(collection.len(), 3);
    }

    #[test]
    fn find_returns_insertion_index() {
        let mut collection = SubsystemCollection::new();
        assert_eq!(collection.find("pump"), Err(CoreError::not_found("pump")));

        collection.append(named("pump")).unwrap();
        collection.append(named("valve")).unwrap();
        collection.append(named("boiler")).unwrap();

        assert_eq!(collection.find("pump"), Ok(0));
        assert_eq!(collection.find("boiler"), Ok(2));
        assert_eq!(
            collection.find("turbine"),
            Err(CoreError::not_found("turbine"))
        );
        assert!(collection.contains("valve"));
    }

    #[test]
    fn remove_compacts_and_preserves_order() {
        let mut collection = SubsystemCollection::new();
        for name in ["a", "b", "c", "d"] {
            collection.append(named(name)).unwrap();
        }

        let removed = collection.remove(1).unwrap();
        assert_eq!(removed.name(), "b");
        assert_eq!(collection.len(), 3);
        let names: Vec<&str> = collection.iter().map(Subsystem::name).collect();
        assert_eq!(names, ["a", "c", "d"]);
    }

    #[test]
    fn remove_out_of_range_leaves_collection_unchanged() {
        let mut collection = SubsystemCollection::new();
        collection.append(named("a")).unwrap();

        let err = collection.remove(1).unwrap_err();
        assert_eq!(err, CoreError::IndexOutOfRange { index: 1, len: 1 });
        assert_eq!(collection.len(), 1);

        let mut empty = SubsystemCollection::new();
        assert!(empty.remove(0).is_err());
    }

    #[test]
    fn render_all_requires_records() {
        let mut collection = SubsystemCollection::new();
        assert_eq!(collection.render_all(), Err(CoreError::EmptyCollection));

        collection.append(named("pump")).unwrap();
        collection.append(named("valve")).unwrap();
        let text = collection.render_all().unwrap();
        assert_eq!(text.lines().count(), 2);
        assert!(text.lines().next().unwrap().contains("pump"));
    }

    #[test]
    fn render_all_consumes_each_pending_payload() {
        let mut collection = SubsystemCollection::new();
        collection.append(named("pump")).unwrap();
        collection.get_mut(0).unwrap().set_data(0x42);

        let first = collection.render_all().unwrap();
        assert!(first.contains("Data: 0x00000042"));

        let second = collection.render_all().unwrap();
        assert!(!second.contains("Data:"));
    }

    #[test]
    fn filter_powered_active_scenario() {
        let mut collection = SubsystemCollection::new();
        collection
            .append(with_status("powered", 0b1010_0000))
            .unwrap();

        let matching = FilterPattern::parse("1*1*0000").unwrap();
        assert_eq!(collection.filter(&matching).unwrap().len(), 1);

        let rejecting = FilterPattern::parse("0*1*0000").unwrap();
        assert!(collection.filter(&rejecting).unwrap().is_empty());
    }

    #[test]
    fn filter_clones_in_source_order() {
        let mut collection = SubsystemCollection::new();
        collection.append(with_status("off1", 0x00)).unwrap();
        collection.append(with_status("on1", 0x80)).unwrap();
        collection.append(with_status("off2", 0x00)).unwrap();
        collection.append(with_status("on2", 0x80)).unwrap();

        let powered = collection.filter(&FilterPattern::parse("1*******").unwrap()).unwrap();
        let names: Vec<&str> = powered.iter().map(Subsystem::name).collect();
        assert_eq!(names, ["on1", "on2"]);
        // Source untouched.
        assert_eq!(collection.len(), 4);
    }

    #[test]
    fn filter_into_resets_destination_and_keeps_partial_fill() {
        let mut source = SubsystemCollection::new();
        for i in 0..3 {
            source.append(with_status(&format!("on{i}"), 0x80)).unwrap();
        }

        let mut dest = SubsystemCollection::with_config(Config::new().max_subsystems(2));
        dest.append(named("stale")).unwrap();

        let pattern = FilterPattern::parse("1*******").unwrap();
        let err = source.filter_into(&pattern, &mut dest).unwrap_err();
        assert_eq!(err, CoreError::CapacityExceeded { capacity: 2 });

        // Stale entry cleared, matches appended until the ceiling.
        let names: Vec<&str> = dest.iter().map(Subsystem::name).collect();
        assert_eq!(names, ["on0", "on1"]);
    }
}
