use nubo_core::listing::{
    ETF_SEARCH_FIELDS, EtfOrderDataset, ListingViewModel, PageSize, ViewParams,
    etf_order_default_visibility,
};

const DATASET: &str = r#"{
  "columns": [
    { "field": "ordenesIngresadas", "headerName": "Órdenes ingresadas", "type": "link" },
    { "field": "nemotecnico", "headerName": "Nemotécnico" },
    { "field": "nombreEtf", "headerName": "Nombre ETF" },
    { "field": "codigoIsinEtf", "headerName": "Código ISIN" },
    { "field": "AdministradorETF", "headerName": "Administrador ETF" }
  ],
  "rows": [
    { "id": 1, "ordenesIngresadas": 4, "nemotecnico": "ICOLCAP", "nombreEtf": "iShares COLCAP", "codigoIsinEtf": "CO0000000011", "AdministradorETF": "BlackRock" },
    { "id": 2, "ordenesIngresadas": 1, "nemotecnico": "CFIETF", "nombreEtf": "Cencosud Index", "codigoIsinEtf": "CL0000000022", "AdministradorETF": "Credicorp" },
    { "id": 3, "ordenesIngresadas": 2, "nemotecnico": "HCOLSEL", "nombreEtf": "Hcolsel Index", "codigoIsinEtf": "CO0000000033", "AdministradorETF": "Skandia" },
    { "id": 4, "ordenesIngresadas": 7, "nemotecnico": "ETFPERU", "nombreEtf": "Perú Select", "codigoIsinEtf": "PE0000000044", "AdministradorETF": "Credicorp" }
  ]
}"#;

#[test]
fn test_order_listing_search_by_isin_prefix() {
    let dataset = EtfOrderDataset::from_json(DATASET).unwrap();
    let vm = ListingViewModel::new();
    let params = ViewParams {
        search_term: "co0".to_string(),
        visible_columns: etf_order_default_visibility(),
        page_size: PageSize::Four,
        page_index: 0,
    };

    let view = vm.view(&dataset.rows, &dataset.columns, &params, &ETF_SEARCH_FIELDS);

    let tickers: Vec<_> = view.rows.iter().map(|r| r.ticker.as_str()).collect();
    assert_eq!(tickers, ["ICOLCAP", "HCOLSEL"]);
    let fields: Vec<_> = view.columns.iter().map(|c| c.field.as_str()).collect();
    assert_eq!(fields, ["ordenesIngresadas", "nemotecnico", "AdministradorETF"]);
}

#[test]
fn test_order_listing_does_not_search_display_fields() {
    let dataset = EtfOrderDataset::from_json(DATASET).unwrap();
    let vm = ListingViewModel::new();
    let params = ViewParams {
        search_term: "credicorp".to_string(),
        ..ViewParams::default()
    };

    let view = vm.view(&dataset.rows, &dataset.columns, &params, &ETF_SEARCH_FIELDS);

    assert_eq!(view.total_rows, 0);
    assert_eq!(view.page_count, 0);
}

#[test]
fn test_order_listing_pages() {
    let dataset = EtfOrderDataset::from_json(DATASET).unwrap();
    let vm = ListingViewModel::new();
    let params = ViewParams {
        page_size: PageSize::Four,
        page_index: 1,
        ..ViewParams::default()
    };

    let view = vm.view(&dataset.rows, &dataset.columns, &params, &ETF_SEARCH_FIELDS);

    // Only one page of four rows; index 1 clamps back to 0.
    assert_eq!(view.page_index, 0);
    assert_eq!(view.rows.len(), 4);
    assert_eq!(view.columns.len(), 5);
}
