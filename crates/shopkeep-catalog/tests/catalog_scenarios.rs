//! End-to-end catalog scenarios driven through record lines.

use chrono::Local;
use shopkeep_catalog::sort::{self, Comparator, Filter};
use shopkeep_catalog::{Catalog, CatalogError, SharedCatalog};
use shopkeep_core::{Money, Rateable, Rating};

const PRODUCTS: &str = "\
# kind,id,name,price,stars[,best-before]
D,101,Tea,1.99,0,2021-09-21
D,102,Coffee,1.99,3
D,103,Soda,2.50,0
F,104,Cake,3.99,0,2021-09-22
F,105,Cookie,2.99,0,2021-09-30
F,106,Muffin,not-a-price,0,2021-09-30
";

const REVIEWS: &str = "\
101,4,Nice hot cup of tea
101,2,Rather weak tea
101,4,Fine tea
101,4,Good tea
101,5,Perfect tea
101,3,Just add some lemon
104,5,Very nice cake, would buy again
105,1,Stale
999,5,Review for a product that never existed
";

fn records(text: &str) -> impl Iterator<Item = &str> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
}

fn load() -> (Catalog, Vec<CatalogError>) {
    let mut catalog = Catalog::new("en-GB");
    let mut errors = Vec::new();

    for line in records(PRODUCTS) {
        if let Err(err) = catalog.parse_product(line) {
            errors.push(err);
        }
    }
    for line in records(REVIEWS) {
        if let Err(err) = catalog.parse_review(line) {
            errors.push(err);
        }
    }

    (catalog, errors)
}

#[test]
fn test_bad_records_are_skipped() {
    let (catalog, errors) = load();

    assert_eq!(catalog.len(), 5);
    assert_eq!(errors.len(), 2);
    assert!(matches!(errors[0], CatalogError::Parse(_)));
    assert!(errors[1].is_not_found());
}

#[test]
fn test_tea_report_after_reviews() {
    let (catalog, _) = load();
    let tea = catalog.find_product(101).unwrap();
    assert_eq!(tea.rating(), Rating::FourStar);

    let today = Local::now().date_naive().format("%d/%m/%Y").to_string();
    let report = catalog.report_for(101).unwrap();
    let lines: Vec<_> = report.lines().collect();

    assert_eq!(lines.len(), 7);
    assert_eq!(
        lines[0],
        format!("Drink: Tea, Price: £1.99, Rating: ★★★★☆, Best Before: {}", today)
    );
    let comments: Vec<_> = lines[1..]
        .iter()
        .map(|line| line.split('\t').nth(1).unwrap())
        .collect();
    assert_eq!(
        comments,
        [
            "Rather weak tea",
            "Just add some lemon",
            "Nice hot cup of tea",
            "Fine tea",
            "Good tea",
            "Perfect tea",
        ]
    );
}

#[test]
fn test_unreviewed_product_keeps_initial_rating() {
    let (catalog, _) = load();
    let coffee = catalog.find_product(102).unwrap();
    assert_eq!(coffee.rating(), Rating::ThreeStar);
    assert!(catalog.report_for(102).unwrap().ends_with("Not reviewed\n"));
}

#[test]
fn test_listing_is_a_total_order() {
    let (catalog, _) = load();
    let sorter = sort::by_rating().reversed().then_by(sort::by_price().reversed());

    let listed: Vec<_> = catalog
        .list_products(sort::all(), &sorter)
        .iter()
        .map(|p| p.name().to_string())
        .collect();
    assert_eq!(listed, ["Cake", "Tea", "Coffee", "Cookie", "Soda"]);

    let mut reversed: Vec<_> = catalog
        .list_products(sort::all(), sorter.reversed())
        .iter()
        .map(|p| p.name().to_string())
        .collect();
    reversed.reverse();
    assert_eq!(reversed, listed);
}

#[test]
fn test_composed_filters() {
    let (catalog, _) = load();

    let fresh_or_cheap = sort::perishable_only().or(sort::price_below(Money::from_cents(200)));
    let picked = catalog.list_products(fresh_or_cheap, sort::by_id());
    let ids: Vec<_> = picked.iter().map(|p| p.id().get()).collect();
    assert_eq!(ids, [101, 102, 104, 105]);

    let unloved = sort::rated_at_least(Rating::TwoStar).negate();
    let picked = catalog.list_products(unloved, sort::by_id());
    let names: Vec<_> = picked.iter().map(|p| p.name()).collect();
    assert_eq!(names, ["Soda", "Cookie"]);
}

#[test]
fn test_discount_table() {
    let (catalog, _) = load();
    let discounts = catalog.discounts_by_rating();

    // Tea 0.20, Coffee 0.20, Soda 0.25, Cake 0.40, Cookie 0.30
    assert_eq!(discounts.len(), 5);
    assert_eq!(discounts["☆☆☆☆☆"], "£0.25");
    assert_eq!(discounts["★☆☆☆☆"], "£0.30");
    assert_eq!(discounts["★★★☆☆"], "£0.20");
    assert_eq!(discounts["★★★★☆"], "£0.20");
    assert_eq!(discounts["★★★★★"], "£0.40");

    let total: Money = catalog.discount_totals().values().sum();
    assert_eq!(total, Money::from_cents(135));
}

#[test]
fn test_switching_locale_rerenders() {
    let (mut catalog, _) = load();

    catalog.change_locale("fr-FR");
    let report = catalog.report_for(104).unwrap();
    assert!(report.starts_with("Aliment : Cake, Prix : 3,99\u{a0}€"));
    assert!(report.contains("22/09/2021"));

    catalog.change_locale("en-US");
    assert!(catalog.report_for(104).unwrap().contains("9/22/21"));
}

#[test]
fn test_shared_catalog_scenario() {
    let (catalog, _) = load();
    let shared = SharedCatalog::from(catalog);

    let rating = shared
        .with_catalog_mut(|c| c.review_product(103, Rating::FiveStar, "Fizzy"))
        .unwrap()
        .rating();
    assert_eq!(rating, Rating::FiveStar);

    let report = shared.with_catalog(|c| c.report_for(103)).unwrap();
    assert!(report.contains("Fizzy"));
}
