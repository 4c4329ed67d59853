//! Full catalog compile through the Typst engine

use cheatsheet_catalog::catalog;
use cheatsheet_pdf::{render_pdf, Transpiler};

#[test]
fn test_catalog_compiles_to_pdf() {
    let pdf = render_pdf(catalog()).expect("catalog should compile");
    assert!(pdf.starts_with(b"%PDF-"));
    assert!(pdf.len() > 1024);
}

#[test]
fn test_catalog_pdf_embeds_fonts_without_host_fonts() {
    // Bundled fonts only: no system search, no font directories
    let pdf = render_pdf(catalog()).unwrap();
    let embedded = pdf
        .windows(b"/FontFile".len())
        .filter(|w| *w == b"/FontFile")
        .count();
    assert!(embedded > 0, "PDF carries no font, its text would not render");
}

#[test]
fn test_markup_labels_every_section() {
    let markup = Transpiler::transpile(catalog());
    for section in catalog().sections() {
        let label = format!("<{}>", section.anchor());
        assert!(markup.contains(&label), "missing label {}", label);
        assert!(markup.contains(&format!("#link({},", label)), "missing toc link {}", label);
    }
}
