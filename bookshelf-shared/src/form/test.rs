use super::*;

fn dune() -> RawBookForm {
    RawBookForm {
        title: "Dune".to_string(),
        author: "Herbert".to_string(),
        publisher: "Chilton".to_string(),
        year: "1965".to_string(),
        pages: "412".to_string(),
    }
}

#[test]
fn parses_complete_form() {
    let fields = dune().parse().unwrap();
    assert_eq!(fields.title, "Dune");
    assert_eq!(fields.year, 1965);
    assert_eq!(fields.pages, 412);
}

#[test]
fn trims_whitespace() {
    let mut form = dune();
    form.author = "  Herbert ".to_string();
    form.pages = " 412\n".to_string();
    let fields = form.parse().unwrap();
    assert_eq!(fields.author, "Herbert");
    assert_eq!(fields.pages, 412);
}

#[test]
fn empty_field_is_rejected() {
    let mut form = dune();
    form.publisher = "   ".to_string();
    assert_eq!(form.parse(), Err(FormError::EmptyField("publisher")));
}

#[test]
fn first_problem_wins() {
    let form = RawBookForm::default();
    assert_eq!(form.parse(), Err(FormError::EmptyField("title")));
}

#[test]
fn non_numeric_year_is_rejected() {
    let mut form = dune();
    form.year = "nineteen".to_string();
    assert_eq!(
        form.parse(),
        Err(FormError::InvalidNumber {
            field: "year",
            value: "nineteen".to_string()
        })
    );
}

#[test]
fn negative_page_count_is_rejected() {
    let mut form = dune();
    form.pages = "-3".to_string();
    assert!(matches!(
        form.parse(),
        Err(FormError::InvalidNumber { field: "pages", .. })
    ));
}

#[test]
fn missing_image_message() {
    assert_eq!(FormError::MissingImage.to_string(), "Please select image");
}
