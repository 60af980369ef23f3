use catalog_search::{CatalogService, ImportantTerms, InMemoryCatalog, ProductItem, SearchEngine};

fn sample_catalog() -> Vec<ProductItem> {
    vec![
        ProductItem::new(1, "Widget", "A plain widget"),
        ProductItem::new(2, "Amazing Widget", "Cool and blue"),
        ProductItem::new(3, "Toy Truck", "Great for Kids"),
        ProductItem::new(4, "Amazing", "Exactly amazing"),
        ProductItem::new(5, "", "Nameless"),
        ProductItem::new(6, "Perfect Gift", ""),
    ]
}

fn service() -> CatalogService<InMemoryCatalog> {
    CatalogService::new(InMemoryCatalog::new(sample_catalog()), ImportantTerms::default())
}

fn ids(items: &[ProductItem]) -> Vec<i64> {
    items.iter().map(|i| i.id).collect()
}

#[tokio::test]
async fn test_search_is_case_insensitive() {
    let service = service();

    for query in ["widget", "WIDGET", "WiDgEt"] {
        let hits = service.search(query).await.unwrap();
        assert!(ids(&hits).contains(&1), "query {query} should find item 1");
    }
}

#[tokio::test]
async fn test_substring_matches_description() {
    let service = service();

    for query in ["Kids", "kids"] {
        let hits = service.search(query).await.unwrap();
        assert_eq!(ids(&hits), vec![3]);
    }
}

#[tokio::test]
async fn test_quoted_query_excludes_partial_hits() {
    let service = service();

    let exact = service.search("\"Amazing\"").await.unwrap();
    assert_eq!(ids(&exact), vec![4]);

    let loose = service.search("Amazing").await.unwrap();
    assert_eq!(ids(&loose), vec![2, 4]);
}

#[tokio::test]
async fn test_quoted_query_requires_full_field_equality() {
    let service = service();

    assert_eq!(ids(&service.search("\"Amazing\"").await.unwrap()), vec![4]);
    assert!(service.search("\"Amazing Wid\"").await.unwrap().is_empty());
    assert!(service.search("\"amazing\"").await.unwrap().is_empty());
}

#[tokio::test]
async fn test_either_field_is_enough() {
    let service = service();

    // name only
    assert_eq!(ids(&service.search("truck").await.unwrap()), vec![3]);
    // description only
    assert_eq!(ids(&service.search("nameless").await.unwrap()), vec![5]);
    // exact on description only
    assert_eq!(ids(&service.search("\"Cool and blue\"").await.unwrap()), vec![2]);
}

#[tokio::test]
async fn test_repeated_searches_are_identical() {
    let service = service();

    let first = service.search("a").await.unwrap();
    let second = service.search("a").await.unwrap();
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_empty_queries() {
    let service = service();

    let everything = service.search("").await.unwrap();
    assert_eq!(everything, sample_catalog());

    let empty_fields = service.search("\"\"").await.unwrap();
    assert_eq!(ids(&empty_fields), vec![5, 6]);
}

#[tokio::test]
async fn test_lone_quote_is_a_literal_substring() {
    let catalog = InMemoryCatalog::new(vec![
        ProductItem::new(1, "The \"Best\" Widget", ""),
        ProductItem::new(2, "", ""),
    ]);
    let service = CatalogService::new(catalog, ImportantTerms::default());

    assert_eq!(ids(&service.search("\"").await.unwrap()), vec![1]);
}

#[test]
fn test_output_is_an_ordered_subsequence_with_duplicates() {
    let mut items = sample_catalog();
    items.insert(0, items[3].clone());
    items.push(items[3].clone());

    let hits = SearchEngine::new().search_raw("amazing", items.iter().cloned());
    assert_eq!(ids(&hits), vec![4, 2, 4]);

    let hits = SearchEngine::new().search_raw("kids", items);
    assert_eq!(ids(&hits), vec![3, 3]);
}

#[tokio::test]
async fn test_missing_query_is_an_error_not_an_empty_result() {
    let service = service();

    let err = service.search_param(None).await.unwrap_err();
    assert!(matches!(err, catalog_search::CatalogError::InvalidQuery { .. }));

    let none = service.search_param(Some("no such product")).await.unwrap();
    assert!(none.is_empty());
}
