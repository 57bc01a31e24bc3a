use crate::schema::{FieldKind, Schema};
use chrono::NaiveDate;
use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ControllerError {
    #[error("no record with id {0}")]
    NotFound(RecordId),
    #[error("field '{0}' is not declared in the schema")]
    InvalidField(String),
}

/// Opaque record identifier. Ids are handed out from a per-controller
/// counter and never reused, including after deletes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RecordId(u64);

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One row of a dashboard. `no` is the dense 1-based display rank over the
/// whole collection (not just the visible page) and is recomputed after
/// every structural change. `values` holds one string per schema field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub id: RecordId,
    pub no: usize,
    pub values: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SortDirection::Asc => "Ascend",
            SortDirection::Desc => "Descend",
        }
    }
}

/// Result of the filter -> sort -> paginate pipeline for the current view.
#[derive(Debug, Clone)]
pub struct PageView {
    pub rows: Vec<Record>,
    pub page: usize,
    pub total_filtered: usize,
    pub total_pages: usize,
}

/// Generic list controller behind every dashboard screen: it owns the
/// record collection and derives the visible page from the current query,
/// per-field filters, sort key and pagination state. Screens only supply a
/// `Schema`; the controller never interprets field values beyond the
/// comparator class the schema declares.
pub struct DatasetController {
    schema: Schema,
    collection: Vec<Record>,
    next_id: u64,
    query: String,
    /// Per-field equality filters, keyed by field index. ANDed with each
    /// other and with the free-text query.
    filters: BTreeMap<usize, String>,
    sort: Option<(usize, SortDirection)>,
    page: usize,
    page_size: usize,
}

impl DatasetController {
    pub fn new(schema: Schema, page_size: usize) -> Self {
        Self {
            schema,
            collection: Vec::new(),
            next_id: 1,
            query: String::new(),
            filters: BTreeMap::new(),
            sort: None,
            page: 1,
            page_size: page_size.max(1),
        }
    }

    /// Replace the collection with freshly numbered records. Row 0 ends up
    /// at the top of the list (`no == 1`).
    pub fn seed(&mut self, rows: Vec<Vec<String>>) {
        self.collection = rows
            .into_iter()
            .map(|mut values| {
                values.resize(self.schema.len(), String::new());
                Record {
                    id: self.alloc_id(),
                    no: 0,
                    values,
                }
            })
            .collect();
        renumber(&mut self.collection);
        self.clamp_page();
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    pub fn len(&self) -> usize {
        self.collection.len()
    }

    pub fn is_empty(&self) -> bool {
        self.collection.is_empty()
    }

    pub fn get(&self, id: RecordId) -> Option<&Record> {
        self.collection.iter().find(|r| r.id == id)
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn sort(&self) -> Option<(usize, SortDirection)> {
        self.sort
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Active filters as (field name, value) pairs, in schema order.
    pub fn active_filters(&self) -> Vec<(String, String)> {
        self.filters
            .iter()
            .map(|(&idx, v)| (self.schema.fields()[idx].name.clone(), v.clone()))
            .collect()
    }

    // --- view state -------------------------------------------------------

    pub fn set_query(&mut self, text: &str) {
        self.query = text.trim().to_string();
        self.clamp_page();
    }

    /// Replace the equality filter on `field`. An empty value clears it.
    pub fn set_filter(&mut self, field: &str, value: &str) -> Result<(), ControllerError> {
        let idx = self.field_index(field)?;
        let value = value.trim();
        if value.is_empty() {
            self.filters.remove(&idx);
        } else {
            self.filters.insert(idx, value.to_string());
        }
        self.clamp_page();
        Ok(())
    }

    pub fn clear_filters(&mut self) {
        self.filters.clear();
        self.query.clear();
        self.clamp_page();
    }

    /// Flip direction if `field` is already the sort key, otherwise start
    /// ascending on it.
    pub fn toggle_sort(&mut self, field: &str) -> Result<(), ControllerError> {
        let idx = self.field_index(field)?;
        self.sort = match self.sort {
            Some((cur, dir)) if cur == idx => Some((idx, dir.flipped())),
            _ => Some((idx, SortDirection::Asc)),
        };
        Ok(())
    }

    pub fn set_sort(&mut self, field: &str, dir: SortDirection) -> Result<(), ControllerError> {
        let idx = self.field_index(field)?;
        self.sort = Some((idx, dir));
        Ok(())
    }

    pub fn clear_sort(&mut self) {
        self.sort = None;
    }

    pub fn set_page(&mut self, n: usize) {
        let total_pages = self.total_pages(self.filtered_count());
        self.page = n.clamp(1, total_pages.max(1));
    }

    /// Changing density invalidates the previous offset, so this always
    /// jumps back to page 1.
    pub fn set_page_size(&mut self, n: usize) {
        self.page_size = n.max(1);
        self.page = 1;
    }

    /// Filter -> stable sort -> slice. Total: an empty result yields an
    /// empty page, never an error, and the slice never exceeds `page_size`.
    pub fn visible_page(&self) -> PageView {
        let mut filtered = self.filtered();
        if let Some((idx, dir)) = self.sort {
            let kind = self.schema.kind_of(idx);
            // Vec::sort_by is stable; reversing the comparator still maps
            // equal keys to Equal, so ties keep their relative order.
            filtered.sort_by(|a, b| {
                let ord = compare_values(
                    kind,
                    a.values.get(idx).map(String::as_str).unwrap_or(""),
                    b.values.get(idx).map(String::as_str).unwrap_or(""),
                );
                match dir {
                    SortDirection::Asc => ord,
                    SortDirection::Desc => ord.reverse(),
                }
            });
        }

        let total_filtered = filtered.len();
        let total_pages = self.total_pages(total_filtered);
        let page = self.page.clamp(1, total_pages.max(1));
        let start = (page - 1) * self.page_size;
        let end = (start + self.page_size).min(total_filtered);
        let rows = if start < end {
            filtered[start..end].to_vec()
        } else {
            Vec::new()
        };
        PageView {
            rows,
            page,
            total_filtered,
            total_pages,
        }
    }

    // --- mutations --------------------------------------------------------

    /// Insert a new record at the head of the collection (newest first) and
    /// renumber everything. `fields` are (name, value) pairs; fields not
    /// named start out empty.
    pub fn create(&mut self, fields: &[(String, String)]) -> Result<Record, ControllerError> {
        let mut values = vec![String::new(); self.schema.len()];
        self.merge_into(&mut values, fields)?;
        let record = Record {
            id: self.alloc_id(),
            no: 0,
            values,
        };
        self.collection.insert(0, record.clone());
        renumber(&mut self.collection);
        self.clamp_page();
        // The stored copy carries the freshly assigned rank.
        Ok(self.collection[0].clone())
    }

    /// Merge `fields` into the record with `id`, preserving `id` and `no`.
    /// A missing id is an error: it means the caller holds a stale
    /// reference.
    pub fn update(
        &mut self,
        id: RecordId,
        fields: &[(String, String)],
    ) -> Result<Record, ControllerError> {
        // Resolve all field names before touching the record, so a bad name
        // cannot leave a half-merged row behind.
        let pos = self
            .collection
            .iter()
            .position(|r| r.id == id)
            .ok_or(ControllerError::NotFound(id))?;
        let mut values = self.collection[pos].values.clone();
        self.merge_into(&mut values, fields)?;
        self.collection[pos].values = values;
        self.clamp_page();
        Ok(self.collection[pos].clone())
    }

    /// Remove the record with `id`; a silent no-op if it is already gone
    /// (delete confirmations can race with each other in the UI flow).
    pub fn remove(&mut self, id: RecordId) {
        let before = self.collection.len();
        self.collection.retain(|r| r.id != id);
        if self.collection.len() != before {
            renumber(&mut self.collection);
        }
        self.clamp_page();
    }

    // --- internals --------------------------------------------------------

    fn alloc_id(&mut self) -> RecordId {
        let id = RecordId(self.next_id);
        self.next_id += 1;
        id
    }

    fn field_index(&self, name: &str) -> Result<usize, ControllerError> {
        self.schema
            .field_index(name)
            .ok_or_else(|| ControllerError::InvalidField(name.to_string()))
    }

    fn merge_into(
        &self,
        values: &mut [String],
        fields: &[(String, String)],
    ) -> Result<(), ControllerError> {
        let mut resolved = Vec::with_capacity(fields.len());
        for (name, value) in fields {
            resolved.push((self.field_index(name)?, value.clone()));
        }
        for (idx, value) in resolved {
            values[idx] = value;
        }
        Ok(())
    }

    fn filtered(&self) -> Vec<Record> {
        self.collection
            .iter()
            .filter(|r| self.matches(r))
            .cloned()
            .collect()
    }

    fn filtered_count(&self) -> usize {
        self.collection.iter().filter(|r| self.matches(r)).count()
    }

    fn matches(&self, record: &Record) -> bool {
        for (&idx, wanted) in &self.filters {
            let value = record.values.get(idx).map(String::as_str).unwrap_or("");
            if !value.eq_ignore_ascii_case(wanted) {
                return false;
            }
        }
        if self.query.is_empty() {
            return true;
        }
        let needle = self.query.to_lowercase();
        self.schema.searchable_indices().iter().any(|&idx| {
            record
                .values
                .get(idx)
                .map(|v| v.to_lowercase().contains(&needle))
                .unwrap_or(false)
        })
    }

    fn total_pages(&self, total_filtered: usize) -> usize {
        total_filtered.div_ceil(self.page_size)
    }

    /// Every operation that can shrink the filtered set ends here, so the
    /// stored page is never out of range for the current result.
    fn clamp_page(&mut self) {
        let total_pages = self.total_pages(self.filtered_count());
        self.page = self.page.clamp(1, total_pages.max(1));
    }
}

/// Full renumbering pass: after any structural change the `no` values are
/// exactly 1..N in current collection order, with no gaps.
pub fn renumber(collection: &mut [Record]) {
    for (i, record) in collection.iter_mut().enumerate() {
        record.no = i + 1;
    }
}

/// Type-aware comparison that never fails on malformed input.
fn compare_values(kind: FieldKind, a: &str, b: &str) -> Ordering {
    match kind {
        FieldKind::Numeric | FieldKind::Currency => digits_value(a).cmp(&digits_value(b)),
        FieldKind::Date => date_value(a).cmp(&date_value(b)),
        FieldKind::Text => a.to_lowercase().cmp(&b.to_lowercase()),
    }
}

/// Numeric key of a formatted amount: every non-digit character is
/// stripped, so "Rp 1.250.000" compares as 1250000. Malformed values (no
/// digits at all) coerce to 0.
fn digits_value(s: &str) -> u128 {
    s.chars()
        .filter_map(|c| c.to_digit(10))
        .fold(0u128, |acc, d| {
            acc.saturating_mul(10).saturating_add(u128::from(d))
        })
}

fn date_value(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s.trim(), "%d-%m-%Y").unwrap_or(NaiveDate::MIN)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{FieldKind, FieldSpec, Schema};

    fn invoice_schema() -> Schema {
        Schema::new(vec![
            FieldSpec::new("Vendor", FieldKind::Text, true),
            FieldSpec::new("Amount", FieldKind::Currency, false),
            FieldSpec::new("Due Date", FieldKind::Date, false),
            FieldSpec::new("Status", FieldKind::Text, true),
        ])
    }

    fn row(vendor: &str, amount: &str, due: &str, status: &str) -> Vec<String> {
        vec![
            vendor.to_string(),
            amount.to_string(),
            due.to_string(),
            status.to_string(),
        ]
    }

    fn pair(name: &str, value: &str) -> (String, String) {
        (name.to_string(), value.to_string())
    }

    fn seeded() -> DatasetController {
        let mut c = DatasetController::new(invoice_schema(), 10);
        c.seed(vec![
            row("PT Sumber Makmur", "Rp 1.000.000", "05-03-2024", "Paid"),
            row("CV Karya Abadi", "Rp 250.000", "12-01-2024", "Unpaid"),
            row("PT Mitra Sejati", "Rp 12.500.000", "28-02-2024", "Unpaid"),
        ]);
        c
    }

    fn nos(c: &DatasetController) -> Vec<usize> {
        let mut page = c.visible_page().rows;
        page.sort_by_key(|r| r.no);
        page.iter().map(|r| r.no).collect()
    }

    #[test]
    fn renumbering_holds_after_every_create_and_remove() {
        let mut c = seeded();
        for i in 0..5 {
            c.create(&[pair("Vendor", &format!("Vendor {i}"))]).unwrap();
            assert_eq!(nos(&c), (1..=c.len()).collect::<Vec<_>>());
        }
        while let Some(id) = c.visible_page().rows.first().map(|r| r.id) {
            c.remove(id);
            if c.len() == 0 {
                break;
            }
            assert_eq!(nos(&c), (1..=c.len()).collect::<Vec<_>>());
        }
    }

    #[test]
    fn remove_middle_then_create_shifts_ranks() {
        let mut c = seeded();
        let middle = c.visible_page().rows.iter().find(|r| r.no == 2).unwrap().id;
        c.remove(middle);

        let rows = c.visible_page().rows;
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].no, 1);
        assert_eq!(rows[1].no, 2);
        assert_eq!(rows[0].values[0], "PT Sumber Makmur");
        assert_eq!(rows[1].values[0], "PT Mitra Sejati");

        let created = c.create(&[pair("Vendor", "UD Baru Jaya")]).unwrap();
        assert_eq!(created.no, 1);
        let rows = c.visible_page().rows;
        assert_eq!(rows[0].values[0], "UD Baru Jaya");
        assert_eq!(rows[1].no, 2);
        assert_eq!(rows[2].no, 3);
    }

    #[test]
    fn create_inserts_at_head() {
        let mut c = seeded();
        let created = c
            .create(&[pair("Vendor", "PT Terbaru"), pair("Status", "Draft")])
            .unwrap();
        assert_eq!(created.no, 1);
        assert_eq!(created.values, row("PT Terbaru", "", "", "Draft"));
        assert_eq!(c.visible_page().rows[0].id, created.id);
    }

    #[test]
    fn pagination_bounds_and_clamping() {
        let mut c = DatasetController::new(invoice_schema(), 10);
        c.seed(
            (1..=25)
                .map(|i| row(&format!("Vendor {i:02}"), "Rp 100", "01-01-2024", "Paid"))
                .collect(),
        );
        let view = c.visible_page();
        assert_eq!(view.total_filtered, 25);
        assert_eq!(view.total_pages, 3);

        c.set_page(10);
        assert_eq!(c.page(), 3);
        let view = c.visible_page();
        assert_eq!(view.rows.len(), 5);
        // Seed order is top-first, so page 3 holds ranks 21..=25.
        assert_eq!(view.rows[0].no, 21);
        assert_eq!(view.rows[4].no, 25);

        c.set_page(0);
        assert_eq!(c.page(), 1);
        assert!(c.visible_page().rows.len() <= c.page_size());
    }

    #[test]
    fn empty_result_is_a_normal_outcome() {
        let mut c = seeded();
        c.set_query("no such vendor anywhere");
        let view = c.visible_page();
        assert_eq!(view.total_filtered, 0);
        assert_eq!(view.total_pages, 0);
        assert!(view.rows.is_empty());
        assert_eq!(view.page, 1);
    }

    #[test]
    fn shrinking_filter_clamps_stored_page() {
        let mut c = DatasetController::new(invoice_schema(), 5);
        let mut rows: Vec<_> = (1..=23)
            .map(|i| row(&format!("Vendor {i:02}"), "Rp 100", "01-01-2024", "Paid"))
            .collect();
        rows.push(row("Solo Match", "Rp 900", "01-01-2024", "Unpaid"));
        c.seed(rows);
        c.set_page(5);
        assert_eq!(c.page(), 5);

        c.set_query("solo");
        assert_eq!(c.page(), 1);
        assert_eq!(c.visible_page().rows.len(), 1);
    }

    #[test]
    fn remove_clamps_stored_page() {
        let mut c = DatasetController::new(invoice_schema(), 2);
        c.seed(vec![
            row("A", "Rp 1", "01-01-2024", "Paid"),
            row("B", "Rp 2", "01-01-2024", "Paid"),
            row("C", "Rp 3", "01-01-2024", "Paid"),
        ]);
        c.set_page(2);
        let last = c.visible_page().rows[0].id;
        c.remove(last);
        assert_eq!(c.page(), 1);
    }

    #[test]
    fn page_size_change_resets_to_first_page() {
        let mut c = seeded();
        c.set_page_size(1);
        assert_eq!(c.page(), 1);
        assert_eq!(c.visible_page().rows.len(), 1);
        // The page_size > 0 invariant is held here, not by callers.
        c.set_page_size(0);
        assert_eq!(c.page_size(), 1);
    }

    #[test]
    fn toggle_sort_starts_ascending_then_flips() {
        let mut c = seeded();
        c.toggle_sort("Amount").unwrap();
        assert_eq!(c.sort(), Some((1, SortDirection::Asc)));
        let asc: Vec<_> = c
            .visible_page()
            .rows
            .iter()
            .map(|r| r.values[1].clone())
            .collect();
        assert_eq!(asc, vec!["Rp 250.000", "Rp 1.000.000", "Rp 12.500.000"]);

        c.toggle_sort("Amount").unwrap();
        assert_eq!(c.sort(), Some((1, SortDirection::Desc)));
        let desc: Vec<_> = c
            .visible_page()
            .rows
            .iter()
            .map(|r| r.values[1].clone())
            .collect();
        assert_eq!(desc, vec!["Rp 12.500.000", "Rp 1.000.000", "Rp 250.000"]);

        c.toggle_sort("Due Date").unwrap();
        assert_eq!(c.sort(), Some((2, SortDirection::Asc)));
    }

    #[test]
    fn sort_is_stable_on_equal_keys() {
        let mut c = DatasetController::new(invoice_schema(), 10);
        c.seed(vec![
            row("First", "Rp 100", "01-01-2024", "Paid"),
            row("Second", "Rp 100", "01-01-2024", "Paid"),
            row("Third", "Rp 100", "01-01-2024", "Paid"),
        ]);
        c.toggle_sort("Amount").unwrap();
        let asc: Vec<_> = c
            .visible_page()
            .rows
            .iter()
            .map(|r| r.values[0].clone())
            .collect();
        assert_eq!(asc, vec!["First", "Second", "Third"]);
        c.toggle_sort("Amount").unwrap();
        let desc: Vec<_> = c
            .visible_page()
            .rows
            .iter()
            .map(|r| r.values[0].clone())
            .collect();
        assert_eq!(desc, vec!["First", "Second", "Third"]);
    }

    #[test]
    fn currency_sort_compares_digits_not_text() {
        let mut c = seeded();
        c.toggle_sort("Amount").unwrap();
        let first = &c.visible_page().rows[0];
        assert_eq!(first.values[1], "Rp 250.000");
    }

    #[test]
    fn malformed_values_never_break_sorting() {
        let mut c = DatasetController::new(invoice_schema(), 10);
        c.seed(vec![
            row("A", "not a number", "never", "Paid"),
            row("B", "Rp 5.000", "03-06-2024", "Paid"),
        ]);
        c.toggle_sort("Amount").unwrap();
        // Malformed amount coerces to 0 and sorts first ascending.
        assert_eq!(c.visible_page().rows[0].values[0], "A");
        c.toggle_sort("Due Date").unwrap();
        // Malformed date coerces to the minimum date.
        assert_eq!(c.visible_page().rows[0].values[0], "A");
    }

    #[test]
    fn date_sort_is_chronological() {
        let mut c = seeded();
        c.toggle_sort("Due Date").unwrap();
        let dues: Vec<_> = c
            .visible_page()
            .rows
            .iter()
            .map(|r| r.values[2].clone())
            .collect();
        assert_eq!(dues, vec!["12-01-2024", "28-02-2024", "05-03-2024"]);
    }

    #[test]
    fn query_and_filter_compose_with_and_semantics() {
        let mut c = seeded();
        c.set_query("pt");
        c.set_filter("Status", "Unpaid").unwrap();
        let a: Vec<_> = c.visible_page().rows.iter().map(|r| r.id).collect();

        let mut c = seeded();
        c.set_filter("Status", "Unpaid").unwrap();
        c.set_query("pt");
        let b: Vec<_> = c.visible_page().rows.iter().map(|r| r.id).collect();

        assert_eq!(a, b);
        assert_eq!(a.len(), 1);
        assert_eq!(c.get(a[0]).unwrap().values[0], "PT Mitra Sejati");
    }

    #[test]
    fn query_scans_only_searchable_fields() {
        let mut c = seeded();
        // "12.500.000" only appears in Amount, which is not searchable.
        c.set_query("12.500");
        assert_eq!(c.visible_page().total_filtered, 0);
        c.set_query("mitra");
        assert_eq!(c.visible_page().total_filtered, 1);
    }

    #[test]
    fn empty_filter_value_clears_the_filter() {
        let mut c = seeded();
        c.set_filter("Status", "Unpaid").unwrap();
        assert_eq!(c.visible_page().total_filtered, 2);
        c.set_filter("Status", "").unwrap();
        assert_eq!(c.visible_page().total_filtered, 3);
    }

    #[test]
    fn deleted_ids_are_never_reused() {
        let mut c = seeded();
        let mut seen: Vec<RecordId> = c.visible_page().rows.iter().map(|r| r.id).collect();
        let victim = seen[0];
        c.remove(victim);
        for _ in 0..3 {
            let created = c.create(&[pair("Vendor", "Replacement")]).unwrap();
            assert!(!seen.contains(&created.id));
            seen.push(created.id);
        }
    }

    #[test]
    fn update_merges_and_preserves_identity() {
        let mut c = seeded();
        let target = c.visible_page().rows[1].clone();
        let updated = c
            .update(target.id, &[pair("Status", "Paid")])
            .unwrap();
        assert_eq!(updated.id, target.id);
        assert_eq!(updated.no, target.no);
        assert_eq!(updated.values[0], target.values[0]);
        assert_eq!(updated.values[3], "Paid");
    }

    #[test]
    fn update_missing_id_is_an_error() {
        let mut c = seeded();
        let ghost = c.visible_page().rows[0].id;
        c.remove(ghost);
        assert_eq!(
            c.update(ghost, &[pair("Status", "Paid")]),
            Err(ControllerError::NotFound(ghost))
        );
    }

    #[test]
    fn remove_missing_id_is_a_silent_noop() {
        let mut c = seeded();
        let ghost = c.visible_page().rows[0].id;
        c.remove(ghost);
        let before = c.len();
        c.remove(ghost);
        assert_eq!(c.len(), before);
        assert_eq!(nos(&c), (1..=before).collect::<Vec<_>>());
    }

    #[test]
    fn undeclared_fields_are_rejected() {
        let mut c = seeded();
        assert_eq!(
            c.toggle_sort("Margin"),
            Err(ControllerError::InvalidField("Margin".into()))
        );
        assert_eq!(
            c.set_filter("Margin", "x"),
            Err(ControllerError::InvalidField("Margin".into()))
        );
        let id = c.visible_page().rows[0].id;
        assert_eq!(
            c.update(id, &[pair("Margin", "x")]),
            Err(ControllerError::InvalidField("Margin".into()))
        );
        // A failed merge must not leave a half-updated record behind.
        assert_eq!(c.get(id).unwrap().values, seeded().visible_page().rows[0].values);
    }
}
