use chrono::NaiveDate;
use interior_quote::config::Config;
use interior_quote::export::{export_quotation, ExportFormat};
use interior_quote::model::{
    load_quotation, BedroomItem, BhkType, ClientField, RoomField, WorkCategory, WorkField,
};
use interior_quote::state::{reduce, Action, QuoteForm};
use pretty_assertions::assert_eq;

const FORM_DATA: &str = r#"{
    "clientName": "Meera Iyer",
    "contactNumber": 9876543210,
    "city": "Pune",
    "carpetArea": "1150",
    "bedrooms": [
        {"id": 1, "items": {"bed": true, "wardrobe": true}, "area": "150", "rate": 1200}
    ],
    "livingRoom": {"items": {"tvUnit": true, "safetyDoor": true}, "area": 220, "rate": "900"},
    "kitchen": {"area": "80", "rate": "1500"},
    "electrical": {"units": 24, "rate": 350}
}"#;

fn date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
}

#[test]
fn load_edit_and_export_every_format() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("meera.json");
    std::fs::write(&input, FORM_DATA).unwrap();

    let quotation = load_quotation(&input).unwrap();
    assert_eq!(quotation.client.contact_number, "9876543210");
    // 150*1200 + 220*900 + 80*1500 + 24*350
    assert_eq!(quotation.total_cost(), 506_400.0);

    let mut form = QuoteForm::from_quotation(quotation);
    for action in [
        Action::SetBhkType(BhkType::Two),
        Action::SelectBedroom(1),
        Action::ToggleBedroomItem {
            index: 1,
            item: BedroomItem::SideTable,
        },
        Action::UpdateBedroomField {
            index: 1,
            field: RoomField::Area,
            value: "100".into(),
        },
        Action::UpdateBedroomField {
            index: 1,
            field: RoomField::Rate,
            value: "1000".into(),
        },
        Action::UpdateCategoryField {
            category: WorkCategory::Painting,
            field: WorkField::Quantity,
            value: "0".into(),
        },
        Action::SetClientField {
            field: ClientField::City,
            value: "Mumbai".into(),
        },
    ] {
        form = reduce(&form, action).unwrap();
    }
    assert_eq!(form.active_bedroom, 1);
    assert_eq!(form.total_cost(), 606_400.0);

    let snapshot = form.quotation.snapshot(date());
    let config = Config::default();
    let mut written = Vec::new();
    for format in [ExportFormat::Pdf, ExportFormat::Json, ExportFormat::Csv] {
        let path = export_quotation(&snapshot, &config, format, dir.path(), 1_760_000_000_000)
            .unwrap();
        assert_eq!(
            path.file_name().unwrap().to_str().unwrap(),
            format!("Estimate_Quotation_Meera_Iyer_1760000000000.{}", format.extension())
        );
        written.push(path);
    }

    assert!(std::fs::read(&written[0]).unwrap().starts_with(b"%PDF"));

    let reloaded = load_quotation(&written[1]).unwrap();
    assert_eq!(reloaded, form.quotation);

    let csv = std::fs::read_to_string(&written[2]).unwrap();
    let last = csv.lines().last().unwrap();
    assert_eq!(last, "Total,,,606400");
}

#[test]
fn shrinking_bhk_drops_bedroom_costs() {
    let mut form = QuoteForm::new();
    form = reduce(&form, Action::SetBhkType(BhkType::Three)).unwrap();
    form = reduce(
        &form,
        Action::UpdateBedroomField {
            index: 2,
            field: RoomField::Area,
            value: "100".into(),
        },
    )
    .unwrap();
    form = reduce(
        &form,
        Action::UpdateBedroomField {
            index: 2,
            field: RoomField::Rate,
            value: "50".into(),
        },
    )
    .unwrap();
    form = reduce(&form, Action::SelectBedroom(2)).unwrap();
    assert_eq!(form.total_cost(), 5000.0);

    let shrunk = reduce(&form, Action::SetBhkType(BhkType::One)).unwrap();
    assert_eq!(shrunk.total_cost(), 0.0);
    assert_eq!(shrunk.active_bedroom, 0);
    assert!(reduce(&shrunk, Action::SelectBedroom(1)).is_err());
}

#[test]
fn export_into_missing_directory_fails_cleanly() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing");
    let snapshot = QuoteForm::new().quotation.snapshot(date());

    let result = export_quotation(
        &snapshot,
        &Config::default(),
        ExportFormat::Pdf,
        &missing,
        42,
    );

    assert!(result.is_err());
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}
