use crate::schema::{FieldKind, FieldSpec, Schema};

/// One admin screen: a schema plus the rows it starts out with. Seed rows
/// are listed top-first (the most recent entry first), matching how the
/// controller numbers them.
pub struct Dashboard {
    pub slug: &'static str,
    pub title: &'static str,
    pub schema: Schema,
    pub seed: Vec<Vec<String>>,
}

fn rows(raw: &[&[&str]]) -> Vec<Vec<String>> {
    raw.iter()
        .map(|r| r.iter().map(|s| s.to_string()).collect())
        .collect()
}

pub fn builtin_dashboards() -> Vec<Dashboard> {
    vec![
        contracts(),
        payroll(),
        invoices(),
        vendors(),
        timesheets(),
    ]
}

fn contracts() -> Dashboard {
    Dashboard {
        slug: "contracts",
        title: "HR Contracts",
        schema: Schema::new(vec![
            FieldSpec::new("Employee", FieldKind::Text, true),
            FieldSpec::new("Position", FieldKind::Text, true),
            FieldSpec::new("Department", FieldKind::Text, true),
            FieldSpec::new("Start Date", FieldKind::Date, false),
            FieldSpec::new("End Date", FieldKind::Date, false),
            FieldSpec::new("Status", FieldKind::Text, true),
        ]),
        seed: rows(&[
            &["Ratna Dewi", "HSE Officer", "QHSE", "01-07-2024", "30-06-2025", "Active"],
            &["Budi Santoso", "Site Engineer", "Operations", "15-03-2024", "14-03-2025", "Active"],
            &["Agus Wijaya", "Accountant", "Finance", "01-02-2024", "31-01-2025", "Active"],
            &["Siti Rahma", "Admin Staff", "General Affairs", "10-01-2024", "09-01-2025", "Expired"],
            &["Dedi Kurniawan", "Driver", "Logistics", "05-11-2023", "04-11-2024", "Expired"],
        ]),
    }
}

fn payroll() -> Dashboard {
    Dashboard {
        slug: "payroll",
        title: "Payroll",
        schema: Schema::new(vec![
            FieldSpec::new("Employee", FieldKind::Text, true),
            FieldSpec::new("Period", FieldKind::Text, true),
            FieldSpec::new("Base Salary", FieldKind::Currency, false),
            FieldSpec::new("Allowance", FieldKind::Currency, false),
            FieldSpec::new("Deduction", FieldKind::Currency, false),
            FieldSpec::new("Status", FieldKind::Text, true),
        ]),
        seed: rows(&[
            &["Ratna Dewi", "2024-06", "Rp 9.000.000", "Rp 1.250.000", "Rp 450.000", "Paid"],
            &["Budi Santoso", "2024-06", "Rp 12.500.000", "Rp 2.000.000", "Rp 625.000", "Paid"],
            &["Agus Wijaya", "2024-06", "Rp 10.750.000", "Rp 1.500.000", "Rp 537.500", "Pending"],
            &["Siti Rahma", "2024-06", "Rp 6.500.000", "Rp 750.000", "Rp 325.000", "Pending"],
        ]),
    }
}

fn invoices() -> Dashboard {
    Dashboard {
        slug: "invoices",
        title: "Invoicing",
        schema: Schema::new(vec![
            FieldSpec::new("Invoice No", FieldKind::Text, true),
            FieldSpec::new("Vendor", FieldKind::Text, true),
            FieldSpec::new("Amount", FieldKind::Currency, false),
            FieldSpec::new("Issued", FieldKind::Date, false),
            FieldSpec::new("Due Date", FieldKind::Date, false),
            FieldSpec::new("Status", FieldKind::Text, true),
        ]),
        seed: rows(&[
            &["INV-2024-0107", "PT Mitra Sejati", "Rp 12.500.000", "20-06-2024", "20-07-2024", "Unpaid"],
            &["INV-2024-0106", "CV Karya Abadi", "Rp 250.000", "12-06-2024", "12-07-2024", "Unpaid"],
            &["INV-2024-0105", "PT Sumber Makmur", "Rp 1.000.000", "05-06-2024", "05-07-2024", "Paid"],
            &["INV-2024-0104", "UD Tani Jaya", "Rp 3.750.000", "28-05-2024", "27-06-2024", "Paid"],
            &["INV-2024-0103", "PT Mitra Sejati", "Rp 8.200.000", "15-05-2024", "14-06-2024", "Overdue"],
        ]),
    }
}

fn vendors() -> Dashboard {
    Dashboard {
        slug: "vendors",
        title: "Vendor Management",
        schema: Schema::new(vec![
            FieldSpec::new("Vendor", FieldKind::Text, true),
            FieldSpec::new("Category", FieldKind::Text, true),
            FieldSpec::new("Contact", FieldKind::Text, true),
            FieldSpec::new("Rating", FieldKind::Numeric, false),
            FieldSpec::new("Status", FieldKind::Text, true),
        ]),
        seed: rows(&[
            &["PT Mitra Sejati", "Construction", "mitra@sejati.co.id", "4", "Approved"],
            &["CV Karya Abadi", "Office Supplies", "admin@karyaabadi.id", "5", "Approved"],
            &["PT Sumber Makmur", "Catering", "order@sumbermakmur.id", "3", "Approved"],
            &["UD Tani Jaya", "Raw Materials", "tanijaya@mail.com", "4", "Under Review"],
        ]),
    }
}

fn timesheets() -> Dashboard {
    Dashboard {
        slug: "timesheets",
        title: "Timesheets",
        schema: Schema::new(vec![
            FieldSpec::new("Employee", FieldKind::Text, true),
            FieldSpec::new("Date", FieldKind::Date, false),
            FieldSpec::new("Project", FieldKind::Text, true),
            FieldSpec::new("Hours", FieldKind::Numeric, false),
            FieldSpec::new("Overtime", FieldKind::Numeric, false),
            FieldSpec::new("Status", FieldKind::Text, true),
        ]),
        seed: rows(&[
            &["Budi Santoso", "21-06-2024", "Plant Expansion", "8", "2", "Submitted"],
            &["Ratna Dewi", "21-06-2024", "Safety Audit", "8", "0", "Approved"],
            &["Agus Wijaya", "20-06-2024", "Month-End Close", "8", "3", "Approved"],
            &["Siti Rahma", "20-06-2024", "Office Move", "7", "0", "Rejected"],
        ]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeds_match_their_schemas() {
        for d in builtin_dashboards() {
            for (i, row) in d.seed.iter().enumerate() {
                assert_eq!(
                    row.len(),
                    d.schema.len(),
                    "{}: seed row {} width mismatch",
                    d.slug,
                    i
                );
            }
        }
    }

    #[test]
    fn slugs_are_unique() {
        let dashboards = builtin_dashboards();
        for (i, a) in dashboards.iter().enumerate() {
            for b in &dashboards[i + 1..] {
                assert_ne!(a.slug, b.slug);
            }
        }
    }
}
