//! Fundamentals field catalogs
//!
//! The provider's fundamentals payloads are flat objects whose keys range
//! from camelCase (`fiscalDateEnding`) through PascalCase (`MarketCapitalization`)
//! to numbered labels (`01. symbol`, `1: Symbol`). Each record below is the
//! declarative alias table for one payload: the field name is the output
//! name, the `rename(deserialize)` attribute is the source key, and every
//! field is required. Values are forwarded as the provider's strings;
//! fundamentals carry sentinel values like `"None"` and `"-"` that are not
//! numbers.
//!
//! Records are parsed through [`crate::extract::walk_as`], so a missing
//! required field surfaces as a schema validation error.

use serde::{Deserialize, Serialize};

/// GLOBAL_QUOTE payload, under the `Global Quote` key
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GlobalQuote {
    #[serde(rename(deserialize = "01. symbol"))]
    pub symbol: String,
    #[serde(rename(deserialize = "02. open"))]
    pub open: String,
    #[serde(rename(deserialize = "03. high"))]
    pub high: String,
    #[serde(rename(deserialize = "04. low"))]
    pub low: String,
    #[serde(rename(deserialize = "05. price"))]
    pub price: String,
    #[serde(rename(deserialize = "06. volume"))]
    pub volume: String,
    #[serde(rename(deserialize = "07. latest trading day"))]
    pub latest_trading_day: String,
    #[serde(rename(deserialize = "08. previous close"))]
    pub previous_close: String,
    #[serde(rename(deserialize = "09. change"))]
    pub change: String,
    #[serde(rename(deserialize = "10. change percent"))]
    pub change_percent: String,
}

/// CURRENCY_EXCHANGE_RATE payload, under `Realtime Currency Exchange Rate`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExchangeRate {
    #[serde(rename(deserialize = "1. From_Currency Code"))]
    pub from_currency_code: String,
    #[serde(rename(deserialize = "2. From_Currency Name"))]
    pub from_currency_name: String,
    #[serde(rename(deserialize = "3. To_Currency Code"))]
    pub to_currency_code: String,
    #[serde(rename(deserialize = "4. To_Currency Name"))]
    pub to_currency_name: String,
    #[serde(rename(deserialize = "5. Exchange Rate"))]
    pub exchange_rate: String,
    #[serde(rename(deserialize = "6. Last Refreshed"))]
    pub last_refreshed: String,
    #[serde(rename(deserialize = "7. Time Zone"))]
    pub time_zone: String,
    #[serde(rename(deserialize = "8. Bid Price"))]
    pub bid_price: String,
    #[serde(rename(deserialize = "9. Ask Price"))]
    pub ask_price: String,
}

/// Technical-indicator `Meta Data` object (note the colon-numbered keys)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndicatorMetadata {
    #[serde(rename(deserialize = "1: Symbol"))]
    pub symbol: String,
    #[serde(rename(deserialize = "2: Indicator"))]
    pub indicator: String,
    #[serde(rename(deserialize = "3: Last Refreshed"))]
    pub last_refreshed: String,
    #[serde(rename(deserialize = "4: Interval"))]
    pub interval: String,
    #[serde(rename(deserialize = "5: Time Period"))]
    pub time_period: i64,
    #[serde(rename(deserialize = "6: Series Type"))]
    pub series_type: String,
    #[serde(rename(deserialize = "7: Time Zone"))]
    pub time_zone: String,
}

/// One INCOME_STATEMENT report row (`annualReports` / `quarterlyReports`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IncomeStatement {
    #[serde(rename(deserialize = "fiscalDateEnding"))]
    pub fiscal_date_ending: String,
    #[serde(rename(deserialize = "reportedCurrency"))]
    pub reported_currency: String,
    #[serde(rename(deserialize = "grossProfit"))]
    pub gross_profit: String,
    #[serde(rename(deserialize = "totalRevenue"))]
    pub total_revenue: String,
    #[serde(rename(deserialize = "costOfRevenue"))]
    pub cost_of_revenue: String,
    #[serde(rename(deserialize = "costofGoodsAndServicesSold"))]
    pub cost_of_goods_services_sold: String,
    #[serde(rename(deserialize = "operatingIncome"))]
    pub operating_income: String,
    #[serde(rename(deserialize = "sellingGeneralAndAdministrative"))]
    pub selling_general_and_administrative: String,
    #[serde(rename(deserialize = "researchAndDevelopment"))]
    pub research_and_development: String,
    #[serde(rename(deserialize = "operatingExpenses"))]
    pub operating_expenses: String,
    #[serde(rename(deserialize = "investmentIncomeNet"))]
    pub investment_income_net: String,
    #[serde(rename(deserialize = "netInterestIncome"))]
    pub net_interest_income: String,
    #[serde(rename(deserialize = "interestIncome"))]
    pub interest_income: String,
    #[serde(rename(deserialize = "interestExpense"))]
    pub interest_expense: String,
    #[serde(rename(deserialize = "nonInterestIncome"))]
    pub non_interest_income: String,
    #[serde(rename(deserialize = "otherNonOperatingIncome"))]
    pub other_non_operating_income: String,
    #[serde(rename(deserialize = "depreciation"))]
    pub depreciation: String,
    #[serde(rename(deserialize = "depreciationAndAmortization"))]
    pub depreciation_and_amortization: String,
    #[serde(rename(deserialize = "incomeBeforeTax"))]
    pub income_before_tax: String,
    #[serde(rename(deserialize = "incomeTaxExpense"))]
    pub income_tax_expense: String,
    #[serde(rename(deserialize = "interestAndDebtExpense"))]
    pub interest_and_debt_expense: String,
    #[serde(rename(deserialize = "netIncomeFromContinuingOperations"))]
    pub net_income_from_continuing_operations: String,
    #[serde(rename(deserialize = "comprehensiveIncomeNetOfTax"))]
    pub comprehensive_income_net_of_tax: String,
    #[serde(rename(deserialize = "ebit"))]
    pub ebit: String,
    #[serde(rename(deserialize = "ebitda"))]
    pub ebitda: String,
    #[serde(rename(deserialize = "netIncome"))]
    pub net_income: String,
}

/// One CASH_FLOW report row
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CashFlow {
    #[serde(rename(deserialize = "fiscalDateEnding"))]
    pub fiscal_date_ending: String,
    #[serde(rename(deserialize = "reportedCurrency"))]
    pub reported_currency: String,
    #[serde(rename(deserialize = "operatingCashflow"))]
    pub operating_cash_flow: String,
    #[serde(rename(deserialize = "paymentsForOperatingActivities"))]
    pub payments_for_operating_activities: String,
    #[serde(rename(deserialize = "proceedsFromOperatingActivities"))]
    pub proceeds_from_operating_activities: String,
    #[serde(rename(deserialize = "changeInOperatingLiabilities"))]
    pub change_in_operating_liabilities: String,
    #[serde(rename(deserialize = "changeInOperatingAssets"))]
    pub change_in_operating_assets: String,
    #[serde(rename(deserialize = "depreciationDepletionAndAmortization"))]
    pub depreciation_depletion_and_amortization: String,
    #[serde(rename(deserialize = "capitalExpenditures"))]
    pub capital_expenditures: String,
    #[serde(rename(deserialize = "changeInReceivables"))]
    pub change_in_receivables: String,
    #[serde(rename(deserialize = "changeInInventory"))]
    pub change_in_inventory: String,
    #[serde(rename(deserialize = "profitLoss"))]
    pub profit_loss: String,
    #[serde(rename(deserialize = "cashflowFromInvestment"))]
    pub cashflow_from_investment: String,
    #[serde(rename(deserialize = "cashflowFromFinancing"))]
    pub cashflow_from_financing: String,
    #[serde(rename(deserialize = "proceedsFromRepaymentsOfShortTermDebt"))]
    pub proceeds_from_repayments_of_short_term_debt: String,
    #[serde(rename(deserialize = "paymentsForRepurchaseOfCommonStock"))]
    pub payments_for_repurchase_of_common_stock: String,
    #[serde(rename(deserialize = "paymentsForRepurchaseOfEquity"))]
    pub payments_for_repurchase_of_equity: String,
    #[serde(rename(deserialize = "paymentsForRepurchaseOfPreferredStock"))]
    pub payments_for_repurchase_of_preferred_stock: String,
    #[serde(rename(deserialize = "dividendPayout"))]
    pub dividend_payout: String,
    #[serde(rename(deserialize = "dividendPayoutCommonStock"))]
    pub dividend_payout_common_stock: String,
    #[serde(rename(deserialize = "dividendPayoutPreferredStock"))]
    pub dividend_payout_preferred_stock: String,
    #[serde(rename(deserialize = "proceedsFromIssuanceOfCommonStock"))]
    pub proceeds_from_issuance_of_common_stock: String,
    #[serde(
        rename(deserialize = "proceedsFromIssuanceOfLongTermDebtAndCapitalSecuritiesNet")
    )]
    pub proceeds_from_issuance_of_long_term_debt_and_capital_securities_net: String,
    #[serde(rename(deserialize = "proceedsFromIssuanceOfPreferredStock"))]
    pub proceeds_from_issuance_of_preferred_stock: String,
    #[serde(rename(deserialize = "proceedsFromRepurchaseOfEquity"))]
    pub proceeds_from_repurchase_of_equity: String,
    #[serde(rename(deserialize = "proceedsFromSaleOfTreasuryStock"))]
    pub proceeds_from_sale_of_treasury_stock: String,
    #[serde(rename(deserialize = "changeInCashAndCashEquivalents"))]
    pub change_in_cash_and_cash_equivalents: String,
    #[serde(rename(deserialize = "changeInExchangeRate"))]
    pub change_in_exchange_rate: String,
    #[serde(rename(deserialize = "netIncome"))]
    pub net_income: String,
}

/// One BALANCE_SHEET report row
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BalanceSheet {
    #[serde(rename(deserialize = "fiscalDateEnding"))]
    pub fiscal_date_ending: String,
    #[serde(rename(deserialize = "reportedCurrency"))]
    pub reported_currency: String,
    #[serde(rename(deserialize = "totalAssets"))]
    pub total_assets: String,
    #[serde(rename(deserialize = "totalCurrentAssets"))]
    pub total_current_assets: String,
    #[serde(rename(deserialize = "cashAndCashEquivalentsAtCarryingValue"))]
    pub cash_and_cash_equivalents_at_carrying_value: String,
    #[serde(rename(deserialize = "cashAndShortTermInvestments"))]
    pub cash_and_short_term_investments: String,
    #[serde(rename(deserialize = "inventory"))]
    pub inventory: String,
    #[serde(rename(deserialize = "currentNetReceivables"))]
    pub current_net_receivables: String,
    #[serde(rename(deserialize = "totalNonCurrentAssets"))]
    pub total_non_current_assets: String,
    #[serde(rename(deserialize = "propertyPlantEquipment"))]
    pub property_plant_equipment: String,
    #[serde(rename(deserialize = "accumulatedDepreciationAmortizationPPE"))]
    pub accumulated_depreciation_amortization_ppe: String,
    #[serde(rename(deserialize = "intangibleAssets"))]
    pub intangible_assets: String,
    #[serde(rename(deserialize = "intangibleAssetsExcludingGoodwill"))]
    pub intangible_assets_excluding_goodwill: String,
    #[serde(rename(deserialize = "goodwill"))]
    pub goodwill: String,
    #[serde(rename(deserialize = "investments"))]
    pub investments: String,
    #[serde(rename(deserialize = "longTermInvestments"))]
    pub long_term_investments: String,
    #[serde(rename(deserialize = "shortTermInvestments"))]
    pub short_term_investments: String,
    #[serde(rename(deserialize = "otherCurrentAssets"))]
    pub other_current_assets: String,
    #[serde(rename(deserialize = "otherNonCurrentAssets"))]
    pub other_non_current_assets: String,
    #[serde(rename(deserialize = "totalLiabilities"))]
    pub total_liabilities: String,
    #[serde(rename(deserialize = "totalCurrentLiabilities"))]
    pub total_current_liabilities: String,
    #[serde(rename(deserialize = "currentAccountsPayable"))]
    pub current_accounts_payable: String,
    #[serde(rename(deserialize = "deferredRevenue"))]
    pub deferred_revenue: String,
    #[serde(rename(deserialize = "currentDebt"))]
    pub current_debt: String,
    #[serde(rename(deserialize = "shortTermDebt"))]
    pub short_term_debt: String,
    #[serde(rename(deserialize = "totalNonCurrentLiabilities"))]
    pub total_non_current_liabilities: String,
    #[serde(rename(deserialize = "capitalLeaseObligations"))]
    pub capital_lease_obligations: String,
    #[serde(rename(deserialize = "longTermDebt"))]
    pub long_term_debt: String,
    #[serde(rename(deserialize = "currentLongTermDebt"))]
    pub current_long_term_debt: String,
    #[serde(rename(deserialize = "longTermDebtNoncurrent"))]
    pub long_term_debt_noncurrent: String,
    #[serde(rename(deserialize = "shortLongTermDebtTotal"))]
    pub short_long_term_debt_total: String,
    #[serde(rename(deserialize = "otherCurrentLiabilities"))]
    pub other_current_liabilities: String,
    #[serde(rename(deserialize = "otherNonCurrentLiabilities"))]
    pub other_non_current_liabilities: String,
    #[serde(rename(deserialize = "totalShareholderEquity"))]
    pub total_shareholder_equity: String,
    #[serde(rename(deserialize = "treasuryStock"))]
    pub treasury_stock: String,
    #[serde(rename(deserialize = "retainedEarnings"))]
    pub retained_earnings: String,
    #[serde(rename(deserialize = "commonStock"))]
    pub common_stock: String,
    #[serde(rename(deserialize = "commonStockSharesOutstanding"))]
    pub common_stock_shares_outstanding: String,
}

/// OVERVIEW payload (the whole response body)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Overview {
    #[serde(rename(deserialize = "Symbol"))]
    pub symbol: String,
    #[serde(rename(deserialize = "AssetType"))]
    pub asset_type: String,
    #[serde(rename(deserialize = "Name"))]
    pub name: String,
    #[serde(rename(deserialize = "Description"))]
    pub description: String,
    #[serde(rename(deserialize = "CIK"))]
    pub cik: String,
    #[serde(rename(deserialize = "Exchange"))]
    pub exchange: String,
    #[serde(rename(deserialize = "Currency"))]
    pub currency: String,
    #[serde(rename(deserialize = "Country"))]
    pub country: String,
    #[serde(rename(deserialize = "Sector"))]
    pub sector: String,
    #[serde(rename(deserialize = "Industry"))]
    pub industry: String,
    #[serde(rename(deserialize = "Address"))]
    pub address: String,
    #[serde(rename(deserialize = "FiscalYearEnd"))]
    pub fiscal_year_end: String,
    #[serde(rename(deserialize = "LatestQuarter"))]
    pub latest_quarter: String,
    #[serde(rename(deserialize = "MarketCapitalization"))]
    pub market_capitalization: String,
    #[serde(rename(deserialize = "EBITDA"))]
    pub ebitda: String,
    #[serde(rename(deserialize = "PERatio"))]
    pub pe_ratio: String,
    #[serde(rename(deserialize = "PEGRatio"))]
    pub peg_ratio: String,
    #[serde(rename(deserialize = "BookValue"))]
    pub book_value: String,
    #[serde(rename(deserialize = "DividendPerShare"))]
    pub dividend_per_share: String,
    #[serde(rename(deserialize = "DividendYield"))]
    pub dividend_yield: String,
    #[serde(rename(deserialize = "EPS"))]
    pub eps: String,
    #[serde(rename(deserialize = "RevenuePerShareTTM"))]
    pub revenue_per_share_ttm: String,
    #[serde(rename(deserialize = "ProfitMargin"))]
    pub profit_margin: String,
    #[serde(rename(deserialize = "OperatingMarginTTM"))]
    pub operating_margin_ttm: String,
    #[serde(rename(deserialize = "ReturnOnAssetsTTM"))]
    pub return_on_assets_ttm: String,
    #[serde(rename(deserialize = "ReturnOnEquityTTM"))]
    pub return_on_equity_ttm: String,
    #[serde(rename(deserialize = "RevenueTTM"))]
    pub revenue_ttm: String,
    #[serde(rename(deserialize = "GrossProfitTTM"))]
    pub gross_profit_ttm: String,
    #[serde(rename(deserialize = "DilutedEPSTTM"))]
    pub diluted_eps_ttm: String,
    #[serde(rename(deserialize = "QuarterlyEarningsGrowthYOY"))]
    pub quarterly_earnings_growth_yoy: String,
    #[serde(rename(deserialize = "QuarterlyRevenueGrowthYOY"))]
    pub quarterly_revenue_growth_yoy: String,
    #[serde(rename(deserialize = "AnalystTargetPrice"))]
    pub analyst_target_price: String,
    #[serde(rename(deserialize = "TrailingPE"))]
    pub trailing_pe: String,
    #[serde(rename(deserialize = "ForwardPE"))]
    pub forward_pe: String,
    #[serde(rename(deserialize = "PriceToSalesRatioTTM"))]
    pub price_to_sales_ratio_ttm: String,
    #[serde(rename(deserialize = "PriceToBookRatio"))]
    pub price_to_book_ratio: String,
    #[serde(rename(deserialize = "EVToRevenue"))]
    pub ev_to_revenue: String,
    #[serde(rename(deserialize = "EVToEBITDA"))]
    pub ev_to_ebitda: String,
    #[serde(rename(deserialize = "Beta"))]
    pub beta: String,
    #[serde(rename(deserialize = "52WeekHigh"))]
    pub week_high_52: String,
    #[serde(rename(deserialize = "52WeekLow"))]
    pub week_low_52: String,
    #[serde(rename(deserialize = "50DayMovingAverage"))]
    pub day_moving_average_50: String,
    #[serde(rename(deserialize = "200DayMovingAverage"))]
    pub day_moving_average_200: String,
    #[serde(rename(deserialize = "SharesOutstanding"))]
    pub shares_outstanding: String,
    #[serde(rename(deserialize = "DividendDate"))]
    pub dividend_date: String,
    #[serde(rename(deserialize = "ExDividendDate"))]
    pub ex_dividend_date: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use crate::extract::{walk_as, ExtractPath};
    use serde_json::json;

    #[test]
    fn test_global_quote_aliases() {
        let body = json!({
            "Global Quote": {
                "01. symbol": "IBM",
                "02. open": "182.0000",
                "03. high": "184.2000",
                "04. low": "181.4100",
                "05. price": "183.8600",
                "06. volume": "3892973",
                "07. latest trading day": "2024-01-02",
                "08. previous close": "182.4700",
                "09. change": "1.3900",
                "10. change percent": "0.7618%"
            }
        });

        let quote: GlobalQuote = walk_as(&body, ExtractPath::new(&["Global Quote"])).unwrap();
        assert_eq!(quote.symbol, "IBM");
        assert_eq!(quote.change_percent, "0.7618%");
    }

    #[test]
    fn test_global_quote_missing_required_field() {
        let body = json!({
            "Global Quote": {
                "01. symbol": "IBM"
            }
        });

        let err = walk_as::<GlobalQuote>(&body, ExtractPath::new(&["Global Quote"])).unwrap_err();
        assert!(matches!(err, AppError::SchemaValidation(_)));
    }

    #[test]
    fn test_indicator_metadata_colon_keys() {
        let body = json!({
            "1: Symbol": "AAPL",
            "2: Indicator": "Exponential Moving Average (EMA)",
            "3: Last Refreshed": "2024-01-02",
            "4: Interval": "weekly",
            "5: Time Period": 60,
            "6: Series Type": "open",
            "7: Time Zone": "US/Eastern"
        });

        let meta: IndicatorMetadata = serde_json::from_value(body).unwrap();
        assert_eq!(meta.symbol, "AAPL");
        assert_eq!(meta.time_period, 60);
    }

    #[test]
    fn test_exchange_rate_aliases() {
        let body = json!({
            "1. From_Currency Code": "BTC",
            "2. From_Currency Name": "Bitcoin",
            "3. To_Currency Code": "USD",
            "4. To_Currency Name": "United States Dollar",
            "5. Exchange Rate": "43251.11000000",
            "6. Last Refreshed": "2024-01-02 00:00:01",
            "7. Time Zone": "UTC",
            "8. Bid Price": "43251.10000000",
            "9. Ask Price": "43251.11000000"
        });

        let rate: ExchangeRate = serde_json::from_value(body).unwrap();
        assert_eq!(rate.from_currency_code, "BTC");
        assert_eq!(rate.exchange_rate, "43251.11000000");
    }

    #[test]
    fn test_income_statement_camel_case_aliases() {
        let mut report = serde_json::Map::new();
        for key in [
            "fiscalDateEnding",
            "reportedCurrency",
            "grossProfit",
            "totalRevenue",
            "costOfRevenue",
            "costofGoodsAndServicesSold",
            "operatingIncome",
            "sellingGeneralAndAdministrative",
            "researchAndDevelopment",
            "operatingExpenses",
            "investmentIncomeNet",
            "netInterestIncome",
            "interestIncome",
            "interestExpense",
            "nonInterestIncome",
            "otherNonOperatingIncome",
            "depreciation",
            "depreciationAndAmortization",
            "incomeBeforeTax",
            "incomeTaxExpense",
            "interestAndDebtExpense",
            "netIncomeFromContinuingOperations",
            "comprehensiveIncomeNetOfTax",
            "ebit",
            "ebitda",
            "netIncome",
        ] {
            report.insert(key.to_string(), json!("0"));
        }
        report.insert("fiscalDateEnding".to_string(), json!("2023-12-31"));

        let body = json!({"annualReports": [serde_json::Value::Object(report)]});
        let reports: Vec<IncomeStatement> =
            walk_as(&body, ExtractPath::new(&["annualReports"])).unwrap();
        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].fiscal_date_ending, "2023-12-31");
    }
}
