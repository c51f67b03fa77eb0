use serde::Serialize;

/// Purchasable credit packages. The `product_id` is the payment provider's
/// product code; it is the join key the purchase webhook resolves against.
#[derive(Debug, Serialize)]
pub struct CreditPackage {
    pub id: &'static str,
    pub name: &'static str,
    pub credits: i32,
    pub price: &'static str,
    pub product_id: &'static str,
    pub checkout_url: &'static str,
    pub popular: bool,
}

pub const CREDIT_PACKAGES: &[CreditPackage] = &[
    CreditPackage {
        id: "basic",
        name: "Basic",
        credits: 20,
        price: "R$ 19,90",
        product_id: "K101885102O",
        checkout_url: "https://pay.hotmart.com/K101885102O",
        popular: false,
    },
    CreditPackage {
        id: "standard",
        name: "Standard",
        credits: 50,
        price: "R$ 39,90",
        product_id: "F101885804K",
        checkout_url: "https://pay.hotmart.com/F101885804K",
        popular: true,
    },
    CreditPackage {
        id: "pro",
        name: "Pro",
        credits: 150,
        price: "R$ 99,90",
        product_id: "D101885891B",
        checkout_url: "https://pay.hotmart.com/D101885891B",
        popular: false,
    },
];

/// Credits granted for a provider product code, if we sell it.
pub fn credits_for_product(product_id: &str) -> Option<i32> {
    CREDIT_PACKAGES
        .iter()
        .find(|package| package.product_id == product_id)
        .map(|package| package.credits)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_package_maps_its_product_code() {
        assert_eq!(credits_for_product("K101885102O"), Some(20));
        assert_eq!(credits_for_product("F101885804K"), Some(50));
        assert_eq!(credits_for_product("D101885891B"), Some(150));
    }

    #[test]
    fn unknown_products_grant_nothing() {
        assert_eq!(credits_for_product("X000000000Z"), None);
    }
}
