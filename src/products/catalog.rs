//! Load the product catalog from products.csv

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::Reader;
use log::info;

use super::data::{InvestmentProduct, RateRule, RiskLabel};
use crate::error::{FinanceError, Result};
use crate::rates::market::DEFAULT_DATA_PATH;

/// File name of the catalog inside the data directory
pub const PRODUCTS_FILE: &str = "products.csv";

/// Raw CSV row matching products.csv columns
#[derive(Debug, serde::Deserialize)]
struct CsvRow {
    id: String,
    name: String,
    rule: String,
    rate: f64,
    tax_exempt: bool,
    risk: String,
}

impl CsvRow {
    fn into_product(self) -> Result<InvestmentProduct> {
        let rate_rule = RateRule::parse(&self.rule, self.rate)?;
        let risk_label: RiskLabel = self.risk.parse()?;

        Ok(InvestmentProduct::new(self.id, self.name, rate_rule, self.tax_exempt, risk_label))
    }
}

/// Static list of products offered for comparison
#[derive(Debug, Clone)]
pub struct ProductCatalog {
    products: Vec<InvestmentProduct>,
}

impl ProductCatalog {
    pub fn new(products: Vec<InvestmentProduct>) -> Result<Self> {
        for (i, product) in products.iter().enumerate() {
            if products[..i].iter().any(|p| p.id == product.id) {
                return Err(FinanceError::invalid("id", format!("duplicate product id '{}'", product.id)));
            }
            product.rate_rule.validate()?;
        }
        Ok(Self { products })
    }

    /// Built-in catalog used when no products.csv is supplied
    pub fn default_catalog() -> Self {
        use RateRule::*;
        use RiskLabel::*;

        Self {
            products: vec![
                InvestmentProduct::new("cdb-110", "CDB 110% CDI", BenchmarkIndexed(110.0), false, Low),
                InvestmentProduct::new("cdb-pre", "CDB Prefixado", Fixed(12.5), false, Low),
                InvestmentProduct::new("lci-95", "LCI 95% CDI", BenchmarkIndexed(95.0), true, Low),
                InvestmentProduct::new("lca-92", "LCA 92% CDI", BenchmarkIndexed(92.0), true, Low),
                InvestmentProduct::new("tesouro-selic", "Tesouro Selic", BenchmarkIndexed(100.0), false, Low),
                InvestmentProduct::new("tesouro-pre", "Tesouro Prefixado", Fixed(13.0), false, Low),
                InvestmentProduct::new("tesouro-ipca", "Tesouro IPCA+", Variable(10.9), false, Medium),
                InvestmentProduct::new("debenture-inc", "Debenture Incentivada", Variable(12.0), true, High),
            ],
        }
    }

    /// Load from `products.csv` in the default data directory
    pub fn from_csv() -> Result<Self> {
        Self::from_csv_path(Path::new(DEFAULT_DATA_PATH))
    }

    /// Load from `products.csv` in a specific directory
    pub fn from_csv_path(path: &Path) -> Result<Self> {
        let file = File::open(path.join(PRODUCTS_FILE))?;
        let catalog = Self::from_reader(file)?;
        info!("Loaded {} products from {}", catalog.len(), path.display());
        Ok(catalog)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut reader = Reader::from_reader(reader);
        let mut products = Vec::new();

        for result in reader.deserialize() {
            let row: CsvRow = result?;
            products.push(row.into_product()?);
        }

        Self::new(products)
    }

    pub fn products(&self) -> &[InvestmentProduct] {
        &self.products
    }

    pub fn get(&self, id: &str) -> Option<&InvestmentProduct> {
        self.products.iter().find(|p| p.id == id)
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl Default for ProductCatalog {
    fn default() -> Self {
        Self::default_catalog()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_catalog() {
        let data = "\
id,name,rule,rate,tax_exempt,risk
cdb,CDB 105% CDI,BENCHMARK_INDEXED,105,false,Low
pre,Prefixado,FIXED,13,false,Low
lci,LCI,benchmark_indexed,93,true,low
";
        let catalog = ProductCatalog::from_reader(data.as_bytes()).unwrap();

        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.get("pre").unwrap().rate_rule, RateRule::Fixed(13.0));
        assert!(catalog.get("lci").unwrap().is_tax_exempt);
        assert!(catalog.get("missing").is_none());
    }

    #[test]
    fn test_unknown_rule_rejected() {
        let data = "id,name,rule,rate,tax_exempt,risk\nx,X,HYBRID,5,false,Low\n";
        let err = ProductCatalog::from_reader(data.as_bytes()).unwrap_err();
        assert!(matches!(err, FinanceError::InvalidArgument { parameter: "rate_rule", .. }));
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let data = "id,name,rule,rate,tax_exempt,risk\nx,X,FIXED,5,false,Low\nx,Y,FIXED,6,false,Low\n";
        assert!(ProductCatalog::from_reader(data.as_bytes()).is_err());
    }

    #[test]
    fn test_default_catalog_is_valid() {
        let catalog = ProductCatalog::default_catalog();
        assert!(!catalog.is_empty());
        assert!(ProductCatalog::new(catalog.products().to_vec()).is_ok());
    }
}
