//! The fixed catalog of 23 mock SBA 7(a) loan documents.
//!
//! Entries are plain [`DocumentSpec`] values. Placeholder amounts are drawn from the random
//! generator handed in by the caller, so a seeded generator reproduces the same catalog.

use rand::Rng;

use crate::model::{DocumentCategory, DocumentSpec, TableSpec};
use crate::money::format_money;

/// Number of documents in the catalog.
pub const DOCUMENT_COUNT: usize = 23;

const OFFICER: &str = "Authorized Officer";
const OWNER: &str = "John Doe";

/// Column widths for the wide two-column financial tables.
const WIDE_COLUMNS: [f64; 2] = [100.0, 60.0];

/// Column widths for the P&L tables.
const NARROW_COLUMNS: [f64; 2] = [80.0, 60.0];

/// Range of every amount in a generated financial table.
const TABLE_AMOUNT_RANGE: std::ops::RangeInclusive<i64> = 5_000..=500_000;

/// Builds a two-column financial table with a header row and a random amount per item.
fn financial_table<R: Rng + ?Sized>(
    rng: &mut R,
    header: [&str; 2],
    items: &[&str],
    widths: [f64; 2],
) -> TableSpec {
    let mut rows = vec![vec![header[0].to_string(), header[1].to_string()]];
    rows.extend(items.iter().map(|item| {
        let value = rng.gen_range(TABLE_AMOUNT_RANGE);
        vec![item.to_string(), format_money(value)]
    }));

    TableSpec::new(rows)
        .with_column_widths(widths.to_vec())
        .with_total(true)
}

fn random_money<R: Rng + ?Sized>(rng: &mut R, range: std::ops::RangeInclusive<i64>) -> String {
    format_money(rng.gen_range(range))
}

fn business_documents<R: Rng + ?Sized>(rng: &mut R) -> Vec<DocumentSpec> {
    use DocumentCategory::Business;

    let license_number: u32 = rng.gen_range(10_000_000..=99_999_999);
    let franchise_fee = random_money(rng, 20_000..=50_000);
    let monthly_rent = random_money(rng, 4_000..=7_000);

    vec![
        DocumentSpec::new("01_Business_License.pdf", "Business License")
            .with_category(Business)
            .with_line(format!(
                "MockTech LLC licensed in Example State. License No: BL-{license_number} Valid Jan 1, 2025 - Dec 31, 2025."
            )),
        DocumentSpec::new("02_Articles_of_Incorporation.pdf", "Articles of Incorporation")
            .with_category(Business)
            .with_line(
                "MockTech LLC formed under Example State law on Feb 15, 2020. Registered Agent: John Doe",
            ),
        DocumentSpec::new("03_Operating_Agreement.pdf", "Operating Agreement")
            .with_category(Business)
            .with_line(
                "Members: John Doe (60%), Jane Smith (40%). Ownership, voting, profit distribution, management responsibilities defined.",
            ),
        DocumentSpec::new("04_Franchise_Agreement.pdf", "Franchise Agreement")
            .with_category(Business)
            .with_line(format!(
                "Franchisor: ExampleFranchisor Inc.\nFranchisee: MockTech LLC\nTerm: 10 years\nFees: {franchise_fee} initial + 6% royalties\nTraining: 2 weeks\nTerritory: City of Exampleville\nTermination: Breach or insolvency"
            )),
        DocumentSpec::new("05_Lease_Agreement.pdf", "Lease Agreement")
            .with_category(Business)
            .with_line(format!(
                "Landlord: Example Properties Inc.\nTenant: MockTech LLC\nPremises: 123 Main St, Exampleville\nTerm: 5 years starting Jan 1, 2025\nMonthly Rent: {monthly_rent}"
            )),
        DocumentSpec::new(
            "06_Certificate_of_Good_Standing.pdf",
            "Certificate of Good Standing",
        )
        .with_category(Business)
        .with_line(
            "Issued by Secretary of State, confirming MockTech LLC is active and compliant with state regulations.",
        ),
    ]
}

fn financial_statements<R: Rng + ?Sized>(rng: &mut R) -> Vec<DocumentSpec> {
    use DocumentCategory::Financial;

    let assets = financial_table(
        rng,
        ["ASSETS", "Amount"],
        &["Cash", "Accounts Receivable", "Inventory", "Equipment"],
        WIDE_COLUMNS,
    );
    let liabilities = financial_table(
        rng,
        ["LIABILITIES", "Amount"],
        &["Bank Loan", "Accounts Payable"],
        WIDE_COLUMNS,
    );
    let equity = financial_table(rng, ["EQUITY", "Amount"], &["Owner Equity"], WIDE_COLUMNS);

    let revenue = financial_table(
        rng,
        ["Revenue Item", "Amount"],
        &["Product A", "Product B", "Product C"],
        NARROW_COLUMNS,
    );
    let expenses = financial_table(
        rng,
        ["COGS & Expenses", "Amount"],
        &["COGS", "Salaries", "Rent", "Utilities", "Marketing"],
        NARROW_COLUMNS,
    );

    let cash_flow = financial_table(
        rng,
        ["Type", "Amount"],
        &[
            "Cash from Operations",
            "Cash from Investing",
            "Cash from Financing",
            "Net Change",
        ],
        WIDE_COLUMNS,
    );

    vec![
        DocumentSpec::new("07_Balance_Sheet.pdf", "Balance Sheet")
            .with_category(Financial)
            .with_line("Balance Sheet as of Dec 31, 2024")
            .with_table(assets)
            .with_table(liabilities)
            .with_table(equity)
            .with_signature(OFFICER),
        DocumentSpec::new("08_Profit_and_Loss_Statement.pdf", "Profit & Loss Statement")
            .with_category(Financial)
            .with_line("P&L Statement 2024")
            .with_table(revenue)
            .with_table(expenses)
            .with_signature(OFFICER),
        DocumentSpec::new("09_Cash_Flow_Statement.pdf", "Cash Flow Statement")
            .with_category(Financial)
            .with_line("Cash Flow Statement 2024")
            .with_table(cash_flow)
            .with_signature(OFFICER),
    ]
}

fn tax_and_debt_documents<R: Rng + ?Sized>(rng: &mut R) -> Vec<DocumentSpec> {
    use DocumentCategory::TaxAndDebt;

    let balance = random_money(rng, 100_000..=300_000);
    let monthly_payment = random_money(rng, 2_000..=5_000);

    vec![
        DocumentSpec::new("10_Business_Tax_Returns.pdf", "Business Tax Returns")
            .with_category(TaxAndDebt)
            .with_line(
                "Business Tax Returns 2022-2024\nRevenue, expenses, taxable income populated with mock numbers.",
            )
            .with_signature(OFFICER),
        DocumentSpec::new("11_Personal_Tax_Returns.pdf", "Personal Tax Returns")
            .with_category(TaxAndDebt)
            .with_line(
                "Personal Tax Returns 2022-2024 for John Doe\nIncome and tax paid populated with mock numbers.",
            )
            .with_signature(OWNER),
        DocumentSpec::new("12_Schedule_of_Business_Debt.pdf", "Schedule of Business Debt")
            .with_category(TaxAndDebt)
            .with_line(format!(
                "Creditor: MockBank\nBalance: {balance}\nInterest Rate: 5%\nMonthly Payment: {monthly_payment}"
            ))
            .with_signature(OFFICER),
    ]
}

fn personal_documents<R: Rng + ?Sized>(rng: &mut R) -> Vec<DocumentSpec> {
    use DocumentCategory::Personal;

    let assets = financial_table(
        rng,
        ["Assets", "Amount"],
        &["Cash", "Investments", "Property", "Other Assets"],
        WIDE_COLUMNS,
    );
    let liabilities = financial_table(
        rng,
        ["Liabilities", "Amount"],
        &["Credit Card", "Loans", "Other Liabilities"],
        WIDE_COLUMNS,
    );

    vec![
        DocumentSpec::new("13_Personal_Financial_Statement.pdf", "SBA Form 413")
            .with_category(Personal)
            .with_line("John Doe Personal Financial Statement")
            .with_table(assets)
            .with_table(liabilities)
            .with_signature(OWNER),
        DocumentSpec::new("14_Personal_Resume.pdf", "Personal Resume")
            .with_category(Personal)
            .with_line(
                "John Doe\nExperience: 15 years in software engineering and management.\nEducation: BS Computer Science, Example University",
            ),
        DocumentSpec::new("15_Personal_Identification.pdf", "Personal Identification")
            .with_category(Personal)
            .with_line("Driver's License: D1234567\nIssued: Example State\nDOB: Jan 1, 1980"),
        DocumentSpec::new("16_Citizenship_Documents.pdf", "Citizenship Documents")
            .with_category(Personal)
            .with_line("Passport: Mock Passport #123456789\nUS Citizen"),
    ]
}

fn loan_documents<R: Rng + ?Sized>(rng: &mut R) -> Vec<DocumentSpec> {
    use DocumentCategory::Loan;

    let requested = random_money(rng, 400_000..=600_000);
    let application_amount = random_money(rng, 400_000..=600_000);

    vec![
        DocumentSpec::new("17_SBA_Form_1919.pdf", "SBA Form 1919")
            .with_category(Loan)
            .with_line(format!(
                "Borrower Information for MockTech LLC\nRequested Loan: {requested}"
            ))
            .with_signature(OFFICER),
        DocumentSpec::new("18_SBA_Form_912.pdf", "SBA Form 912")
            .with_category(Loan)
            .with_line("Statement of Personal History for John Doe and Jane Smith (mock data)")
            .with_signature(OWNER)
            .with_signature("Jane Smith"),
        DocumentSpec::new("19_Loan_Application_Form.pdf", "Loan Application")
            .with_category(Loan)
            .with_line(format!(
                "SBA 7(a) Loan Application\nRequested Amount: {application_amount}\nPurpose: Working capital and equipment\nTerm: 10 years\nInterest Rate: 6.5%"
            ))
            .with_signature(OFFICER),
    ]
}

fn credit_and_collateral_documents<R: Rng + ?Sized>(rng: &mut R) -> Vec<DocumentSpec> {
    use DocumentCategory::CreditAndCollateral;

    let collateral = financial_table(
        rng,
        ["Item", "Value"],
        &["Office Equipment", "Commercial Property", "Vehicles"],
        WIDE_COLUMNS,
    );
    let purchase_price = random_money(rng, 200_000..=600_000);
    let investors = financial_table(
        rng,
        ["Investor", "Amount"],
        &["John Doe", "Jane Smith", "Other Investors"],
        WIDE_COLUMNS,
    );

    vec![
        DocumentSpec::new(
            "20_Credit_Elsewhere_Documentation.pdf",
            "Credit Elsewhere Documentation",
        )
        .with_category(CreditAndCollateral)
        .with_line(
            "Decline letters from 3 conventional lenders stating credit not available (mock data)",
        )
        .with_signature(OFFICER),
        DocumentSpec::new("21_Collateral_List.pdf", "Collateral Documentation")
            .with_category(CreditAndCollateral)
            .with_table(collateral)
            .with_signature(OFFICER),
        DocumentSpec::new("22_Purchase_Agreement.pdf", "Purchase Agreement")
            .with_category(CreditAndCollateral)
            .with_line(format!(
                "Purchase Agreement for acquisition of ExampleCorp LLC.\nPurchase Price: {purchase_price}"
            ))
            .with_signature(OFFICER),
        DocumentSpec::new("23_Equity_Injection_Proof.pdf", "Equity Injection Proof")
            .with_category(CreditAndCollateral)
            .with_table(investors)
            .with_signature(OFFICER),
    ]
}

/// Builds the full catalog in output order, drawing every placeholder amount from `rng`.
pub fn build_catalog<R: Rng + ?Sized>(rng: &mut R) -> Vec<DocumentSpec> {
    let mut catalog = Vec::with_capacity(DOCUMENT_COUNT);
    catalog.extend(business_documents(rng));
    catalog.extend(financial_statements(rng));
    catalog.extend(tax_and_debt_documents(rng));
    catalog.extend(personal_documents(rng));
    catalog.extend(loan_documents(rng));
    catalog.extend(credit_and_collateral_documents(rng));
    catalog
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use rust_decimal::Decimal;

    use super::*;
    use crate::money::parse_amount;

    fn seeded_catalog(seed: u64) -> Vec<DocumentSpec> {
        build_catalog(&mut StdRng::seed_from_u64(seed))
    }

    #[test]
    fn catalog_has_twenty_three_ordered_entries() {
        let catalog = seeded_catalog(1);
        assert_eq!(catalog.len(), DOCUMENT_COUNT);

        for (index, spec) in catalog.iter().enumerate() {
            let prefix = format!("{:02}_", index + 1);
            assert!(
                spec.filename().starts_with(&prefix),
                "{} should start with {}",
                spec.filename(),
                prefix
            );
            assert!(spec.filename().ends_with(".pdf"));
            assert!(spec.category().is_some());
        }
    }

    #[test]
    fn filenames_are_unique() {
        let catalog = seeded_catalog(2);
        let names: HashSet<_> = catalog.iter().map(DocumentSpec::filename).collect();
        assert_eq!(names.len(), DOCUMENT_COUNT);
    }

    #[test]
    fn same_seed_reproduces_catalog() {
        assert_eq!(seeded_catalog(42), seeded_catalog(42));
    }

    #[test]
    fn table_amounts_stay_in_range() {
        let low = Decimal::from(*TABLE_AMOUNT_RANGE.start());
        let high = Decimal::from(*TABLE_AMOUNT_RANGE.end());

        for spec in seeded_catalog(7) {
            for table in spec.tables().unwrap_or_default() {
                assert!(table.show_total());
                for row in &table.rows()[1..] {
                    let value = parse_amount(&row[1]).value().expect("amount cell parses");
                    assert!(value >= low && value <= high, "{value} out of range");
                }
            }
        }
    }

    #[test]
    fn form_912_has_both_signatures() {
        let catalog = seeded_catalog(3);
        let form = catalog
            .iter()
            .find(|spec| spec.filename() == "18_SBA_Form_912.pdf")
            .expect("form 912 present");
        assert_eq!(
            form.signature_labels(),
            Some(&["John Doe".to_string(), "Jane Smith".to_string()][..])
        );
    }

    #[test]
    fn table_only_documents_have_no_body() {
        let catalog = seeded_catalog(4);
        for name in ["21_Collateral_List.pdf", "23_Equity_Injection_Proof.pdf"] {
            let spec = catalog.iter().find(|spec| spec.filename() == name).unwrap();
            assert!(spec.body_lines().is_empty());
            assert_eq!(spec.tables().map(<[_]>::len), Some(1));
        }
    }
}
