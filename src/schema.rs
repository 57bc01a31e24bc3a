/// Comparator class of a field. The controller never interprets values
/// beyond this: everything is stored and displayed as strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    /// Plain number, possibly with grouping separators.
    Numeric,
    /// Formatted amounts like "Rp 12.500.000"; compared by their digits.
    Currency,
    /// "dd-mm-yyyy" strings, compared chronologically.
    Date,
}

#[derive(Debug, Clone)]
pub struct FieldSpec {
    pub name: String,
    pub kind: FieldKind,
    /// Whether the free-text query scans this field.
    pub searchable: bool,
}

impl FieldSpec {
    pub fn new(name: &str, kind: FieldKind, searchable: bool) -> Self {
        Self {
            name: name.to_string(),
            kind,
            searchable,
        }
    }
}

/// Ordered field table for one dashboard. Every record managed by a
/// controller holds exactly one value per field, in schema order.
#[derive(Debug, Clone)]
pub struct Schema {
    fields: Vec<FieldSpec>,
}

impl Schema {
    pub fn new(fields: Vec<FieldSpec>) -> Self {
        Self { fields }
    }

    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn field_names(&self) -> Vec<String> {
        self.fields.iter().map(|f| f.name.clone()).collect()
    }

    pub fn field_index(&self, name: &str) -> Option<usize> {
        self.fields
            .iter()
            .position(|f| f.name.eq_ignore_ascii_case(name))
    }

    pub fn kind_of(&self, idx: usize) -> FieldKind {
        self.fields.get(idx).map(|f| f.kind).unwrap_or(FieldKind::Text)
    }

    /// Indices scanned by the free-text query.
    pub fn searchable_indices(&self) -> Vec<usize> {
        self.fields
            .iter()
            .enumerate()
            .filter(|(_, f)| f.searchable)
            .map(|(i, _)| i)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Schema {
        Schema::new(vec![
            FieldSpec::new("Employee", FieldKind::Text, true),
            FieldSpec::new("Salary", FieldKind::Currency, false),
            FieldSpec::new("Start Date", FieldKind::Date, false),
        ])
    }

    #[test]
    fn field_lookup_is_case_insensitive() {
        let s = sample();
        assert_eq!(s.field_index("employee"), Some(0));
        assert_eq!(s.field_index("SALARY"), Some(1));
        assert_eq!(s.field_index("missing"), None);
    }

    #[test]
    fn searchable_subset() {
        let s = sample();
        assert_eq!(s.searchable_indices(), vec![0]);
    }
}
