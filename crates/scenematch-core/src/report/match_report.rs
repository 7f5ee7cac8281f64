use std::collections::{BTreeMap, BTreeSet, HashSet};
use std::fmt;
use std::sync::Arc;

use scenematch_core_types::{ComparisonId, ObjectId, TypeTag};

use super::subject::{Identified, Subject};
use super::tier::MatchTier;
use crate::accessor::Comparable;
use crate::logging_facility::{Logger, TracingLogger};

/// What the report knows about one subject
#[derive(Debug, Clone, Copy)]
pub struct MatchRecord<'a> {
    subject: Subject<'a>,
    counterpart: Option<Subject<'a>>,
    tier: MatchTier,
}

impl<'a> MatchRecord<'a> {
    pub fn subject(&self) -> Subject<'a> {
        self.subject
    }

    pub fn counterpart(&self) -> Option<Subject<'a>> {
        self.counterpart
    }

    pub fn tier(&self) -> MatchTier {
        self.tier
    }

    pub fn is_match(&self) -> bool {
        self.tier.is_match()
    }

    fn positive_counterpart(&self) -> Option<Subject<'a>> {
        self.counterpart.filter(|_| self.tier.is_match())
    }
}

/// Accumulator of match records for one top-level comparison
///
/// Every recorded subject is either good (matched with a tier above `None`)
/// or bad (filed as a non-match). Positive records are symmetric: recording
/// `a -> b` also records `b -> a`.
///
/// # Example
///
/// ```
/// use scenematch_core::{MatchReport, MatchTier, Node};
///
/// let a = Node::new("Door");
/// let b = Node::new("Door");
/// let mut report = MatchReport::new();
///
/// assert!(report.add_match(&a, &b, MatchTier::ValueEqual));
/// assert!(!report.add_match(&a, &b, MatchTier::NamesEqual));
/// assert_eq!(report.tier_of(&b), MatchTier::ValueEqual);
/// assert_eq!(report.len(), 2);
/// ```
pub struct MatchReport<'a> {
    records: BTreeMap<ObjectId, MatchRecord<'a>>,
    bad: BTreeSet<ObjectId>,
    good: BTreeSet<ObjectId>,
    add_count: usize,
    add_limit: usize,
    ignored: HashSet<TypeTag>,
    pending_notes: Vec<String>,
    notes: BTreeMap<ObjectId, Vec<String>>,
    equal: bool,
    comparison_id: ComparisonId,
    logger: Arc<dyn Logger>,
}

impl Default for MatchReport<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for MatchReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MatchReport")
            .field("comparison_id", &self.comparison_id)
            .field("equal", &self.equal)
            .field("good", &self.good.len())
            .field("bad", &self.bad.len())
            .field("add_count", &self.add_count)
            .field("add_limit", &self.add_limit)
            .finish_non_exhaustive()
    }
}

impl<'a> MatchReport<'a> {
    pub fn new() -> Self {
        Self {
            records: BTreeMap::new(),
            bad: BTreeSet::new(),
            good: BTreeSet::new(),
            add_count: 0,
            add_limit: 0,
            ignored: HashSet::new(),
            pending_notes: Vec::new(),
            notes: BTreeMap::new(),
            equal: true,
            comparison_id: ComparisonId::new(),
            logger: Arc::new(TracingLogger),
        }
    }

    // ---------- configuration ----------

    /// Cap on accepted `add_match` calls (0 = unlimited)
    pub fn with_add_limit(mut self, limit: usize) -> Self {
        self.add_limit = limit;
        self
    }

    pub fn set_add_limit(&mut self, limit: usize) {
        self.add_limit = limit;
    }

    pub fn add_limit(&self) -> usize {
        self.add_limit
    }

    pub fn with_logger(mut self, logger: Arc<dyn Logger>) -> Self {
        self.logger = logger;
        self
    }

    /// Exclude components of type `T` from comparison and recording
    pub fn ignore_component<T: Comparable>(&mut self) {
        self.ignored.insert(TypeTag::of::<T>());
    }

    pub fn with_ignored<T: Comparable>(mut self) -> Self {
        self.ignore_component::<T>();
        self
    }

    pub fn ignore_type(&mut self, tag: TypeTag) {
        self.ignored.insert(tag);
    }

    pub fn is_ignored(&self, tag: TypeTag) -> bool {
        self.ignored.contains(&tag)
    }

    pub fn should_ignore(&self, subject: Subject<'_>) -> bool {
        subject.type_tag().is_some_and(|tag| self.is_ignored(tag))
    }

    pub fn comparison_id(&self) -> &ComparisonId {
        &self.comparison_id
    }

    // ---------- recording ----------

    /// Record that `a` and `b` correspond with strength `tier`
    ///
    /// Returns false when nothing was recorded: `tier` is `None`, the add
    /// limit is reached, either side is ignored, or either side already
    /// holds a record at least as strong.
    pub fn add_match(
        &mut self,
        a: impl Into<Subject<'a>>,
        b: impl Into<Subject<'a>>,
        tier: MatchTier,
    ) -> bool {
        let (a, b) = (a.into(), b.into());
        if !tier.is_match() || self.limit_reached() {
            return false;
        }
        if self.should_ignore(a) || self.should_ignore(b) {
            return false;
        }
        if self.tier_of(&a) >= tier || self.tier_of(&b) >= tier {
            return false;
        }

        let recursive = self
            .match_of(&a)
            .is_some_and(|prior| prior.id() != b.id());
        self.add_count += 1;
        self.replace_match(a, Some((b, tier)), recursive);
        true
    }

    /// Re-assert a pair from the pairing a comparison finally settled on
    ///
    /// Unlike `add_match` this displaces a record of equal strength that
    /// points elsewhere, left behind by a trial pairing that lost. Only the
    /// displaced reciprocal records are unwound, never whole subtrees, so
    /// pairs confirmed earlier stay intact. Stronger records still win.
    pub(crate) fn confirm_match(&mut self, a: Subject<'a>, b: Subject<'a>, tier: MatchTier) -> bool {
        if !tier.is_match() || self.should_ignore(a) || self.should_ignore(b) {
            return false;
        }
        if self.pair_tier(&a, &b) >= tier && self.pair_tier(&b, &a) >= tier {
            return true;
        }
        if self.tier_of(&a) > tier || self.tier_of(&b) > tier || self.limit_reached() {
            return false;
        }
        self.add_count += 1;
        self.replace_match(a, Some((b, tier)), false);
        true
    }

    /// Drop `a`'s record and install `new` in its place
    ///
    /// The previous counterpart of `a` loses its reciprocal record and is
    /// filed as unmatched. With `recursive`, abandoned subjects also take
    /// their subtrees down with them. `None` files `a` as a non-match.
    pub fn replace_match(
        &mut self,
        a: impl Into<Subject<'a>>,
        new: Option<(Subject<'a>, MatchTier)>,
        recursive: bool,
    ) {
        let a = a.into();
        let previous = self.take_record(a.id());
        if let Some(prior) = previous.and_then(|r| r.positive_counterpart()) {
            let rematched = new.is_some_and(|(b, _)| b.id() == prior.id());
            if prior.id() != a.id() && !rematched {
                self.unwind(prior, a.id(), recursive);
            }
        }

        match new {
            Some((b, tier)) if tier.is_match() => self.install(a, b, tier, recursive),
            _ => {
                self.file_non_match(a);
                if recursive {
                    self.unwind_subtree(a);
                }
            }
        }
    }

    /// Mark the comparison as failed and file `subject` with everything
    /// below it that holds no record yet
    pub fn add_non_match(&mut self, subject: impl Into<Subject<'a>>) {
        self.equal = false;
        self.file_unrecorded(subject.into());
    }

    pub(crate) fn mark_unequal(&mut self) {
        self.equal = false;
    }

    /// Queue a note for the next `push_notes`
    pub fn add_note(&mut self, note: impl Into<String>) {
        self.pending_notes.push(note.into());
    }

    pub fn pending_notes(&self) -> &[String] {
        &self.pending_notes
    }

    /// Move pending notes onto `key`, or discard them when `key` is `None`
    pub fn push_notes(&mut self, key: Option<Subject<'a>>) {
        if self.pending_notes.is_empty() {
            return;
        }
        let pending = std::mem::take(&mut self.pending_notes);
        if let Some(key) = key {
            self.notes.entry(key.id()).or_default().extend(pending);
        }
    }

    fn install(&mut self, a: Subject<'a>, b: Subject<'a>, tier: MatchTier, recursive: bool) {
        if b.id() != a.id() {
            let previous = self.take_record(b.id());
            if let Some(prior) = previous.and_then(|r| r.positive_counterpart()) {
                if prior.id() != a.id() {
                    self.unwind(prior, b.id(), recursive);
                }
            }
            self.put(b, Some(a), tier);
        }
        self.put(a, Some(b), tier);
        if tier >= MatchTier::ValueEqual {
            self.notes.remove(&a.id());
        }
    }

    /// Replace `subject`'s record if it still points at `back_to`
    fn unwind(&mut self, subject: Subject<'a>, back_to: ObjectId, recursive: bool) {
        let points_back = self
            .records
            .get(&subject.id())
            .and_then(MatchRecord::positive_counterpart)
            .is_some_and(|c| c.id() == back_to);
        if points_back {
            self.replace_match(subject, None, recursive);
        }
    }

    fn unwind_subtree(&mut self, subject: Subject<'a>) {
        if let Subject::Node(node) = subject {
            for child in node.children() {
                self.replace_match(child, None, true);
            }
            for component in node.components() {
                let component = Subject::Component(component);
                if !self.should_ignore(component) {
                    self.replace_match(component, None, true);
                }
            }
        }
    }

    fn file_unrecorded(&mut self, subject: Subject<'a>) {
        if self.should_ignore(subject) {
            return;
        }
        if !self.records.contains_key(&subject.id()) {
            self.file_non_match(subject);
        }
        if let Subject::Node(node) = subject {
            for child in node.children() {
                self.file_unrecorded(Subject::Node(child));
            }
            for component in node.components() {
                self.file_unrecorded(Subject::Component(component));
            }
        }
    }

    fn file_non_match(&mut self, subject: Subject<'a>) {
        self.put(subject, None, MatchTier::None);
    }

    fn put(&mut self, subject: Subject<'a>, counterpart: Option<Subject<'a>>, tier: MatchTier) {
        let id = subject.id();
        self.records.insert(
            id,
            MatchRecord {
                subject,
                counterpart,
                tier,
            },
        );
        if tier.is_match() {
            self.bad.remove(&id);
            self.good.insert(id);
        } else {
            self.good.remove(&id);
            self.bad.insert(id);
        }
    }

    fn take_record(&mut self, id: ObjectId) -> Option<MatchRecord<'a>> {
        self.bad.remove(&id);
        self.good.remove(&id);
        self.records.remove(&id)
    }

    fn limit_reached(&self) -> bool {
        self.add_limit != 0 && self.add_count >= self.add_limit
    }

    // ---------- queries ----------

    /// True until a non-match is recorded
    pub fn is_equal(&self) -> bool {
        self.equal
    }

    pub fn record(&self, x: &impl Identified) -> Option<&MatchRecord<'a>> {
        self.records.get(&x.object_id())
    }

    pub fn tier_of(&self, x: &impl Identified) -> MatchTier {
        self.record(x).map_or(MatchTier::None, MatchRecord::tier)
    }

    /// Counterpart of `x`, if it is matched
    pub fn match_of(&self, x: &impl Identified) -> Option<Subject<'a>> {
        self.record(x).and_then(MatchRecord::positive_counterpart)
    }

    /// Tier of the recorded pairing `a -> b`, `None` if `a` is paired elsewhere
    pub fn pair_tier(&self, a: &impl Identified, b: &impl Identified) -> MatchTier {
        match self.record(a) {
            Some(record) if record.counterpart.is_some_and(|c| c.id() == b.object_id()) => {
                record.tier
            }
            _ => MatchTier::None,
        }
    }

    /// Whether `x` was matched; logs when `x` was never compared
    pub fn matched(&self, x: &impl Identified) -> bool {
        match self.record(x) {
            Some(record) => record.is_match(),
            None => {
                self.logger
                    .log(&format!("object {} was not checked for match", x.object_id()));
                false
            }
        }
    }

    /// Mismatch notes recorded for `x`; logs when `x` was never compared
    pub fn notes(&self, x: &impl Identified) -> &[String] {
        let id = x.object_id();
        if let Some(notes) = self.notes.get(&id) {
            return notes.as_slice();
        }
        if !self.records.contains_key(&id) {
            self.logger
                .log(&format!("no notes recorded for object {id}"));
        }
        &[]
    }

    pub fn all_matches(&self) -> impl Iterator<Item = &MatchRecord<'a>> + '_ {
        self.records.values()
    }

    pub fn bad_matches(&self) -> Vec<Subject<'a>> {
        self.subjects(&self.bad)
    }

    pub fn good_matches(&self) -> Vec<Subject<'a>> {
        self.subjects(&self.good)
    }

    pub fn is_bad(&self, x: &impl Identified) -> bool {
        self.bad.contains(&x.object_id())
    }

    pub fn is_good(&self, x: &impl Identified) -> bool {
        self.good.contains(&x.object_id())
    }

    /// Number of recorded subjects (good plus bad)
    pub fn len(&self) -> usize {
        self.bad.len() + self.good.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Accepted `add_match` calls so far
    pub fn add_count(&self) -> usize {
        self.add_count
    }

    fn subjects(&self, ids: &BTreeSet<ObjectId>) -> Vec<Subject<'a>> {
        ids.iter()
            .filter_map(|id| self.records.get(id).map(MatchRecord::subject))
            .collect()
    }
}
