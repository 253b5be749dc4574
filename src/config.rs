//! Dashboard catalogue and chart constants.

use crate::kpi::payload::SeriesOrder;

/// Rows per page in every detail table.
pub const ITEMS_PER_PAGE: usize = 5;

/// KPI card sparkline canvas (`viewBox`).
pub const SPARK_WIDTH: f64 = 400.0;
pub const SPARK_HEIGHT: f64 = 100.0;

/// Larger trend chart inside an expanded row.
pub const DETAIL_CHART_WIDTH: f64 = 400.0;
pub const DETAIL_CHART_HEIGHT: f64 = 140.0;

pub const CHART_PADDING: f64 = 10.0;
pub const GAUGE_RADIUS: f64 = 45.0;

/// Reporting window requested from the API (`?type=`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Period {
    #[default]
    Weekly,
    Monthly,
}

impl Period {
    pub const ALL: [Period; 2] = [Period::Weekly, Period::Monthly];

    pub fn as_query(&self) -> &'static str {
        match self {
            Period::Weekly => "weekly",
            Period::Monthly => "monthly",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Period::Weekly => "Hebdomadaire",
            Period::Monthly => "Mensuel",
        }
    }
}

/// A detail-table column.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Column {
    pub key: &'static str,
    pub label: &'static str,
    pub numeric: bool,
}

const fn text(key: &'static str, label: &'static str) -> Column {
    Column {
        key,
        label,
        numeric: false,
    }
}

const fn num(key: &'static str, label: &'static str) -> Column {
    Column {
        key,
        label,
        numeric: true,
    }
}

/// One dashboard view and how to read its payload.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DashboardDomain {
    /// Route segment and API domain (`/api/<slug>`).
    pub slug: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    /// Order of undated history arrays in this domain's payloads.
    pub series_order: SeriesOrder,
    /// Metrics drawn as `[0, 100]` radial gauges instead of sparkline cards.
    pub gauges: &'static [&'static str],
    pub columns: &'static [Column],
    /// Measure summed per dimension above the table.
    pub measure: Option<&'static str>,
}

pub const DOMAINS: &[DashboardDomain] = &[
    DashboardDomain {
        slug: "scrap",
        title: "Scrap",
        subtitle: "Rebuts par zone et par machine",
        series_order: SeriesOrder::OldestFirst,
        gauges: &["Taux_Scrap"],
        columns: &[
            text("Date", "Date"),
            text("Zone", "Zone"),
            text("Machine", "Machine"),
            num("Quantite", "Quantite"),
            num("Cout", "Cout (EUR)"),
            text("Raison", "Raison"),
        ],
        measure: Some("Cout"),
    },
    DashboardDomain {
        slug: "quality",
        title: "Qualite",
        subtitle: "Reclamations clients et conformite",
        series_order: SeriesOrder::NewestFirst,
        gauges: &["Taux_Conformite"],
        columns: &[
            text("Date", "Date"),
            text("Client", "Client"),
            text("Reference", "Reference"),
            num("Quantite", "Quantite"),
            text("Statut", "Statut"),
        ],
        measure: Some("Quantite"),
    },
    DashboardDomain {
        slug: "workflow",
        title: "Workflow",
        subtitle: "Taches et delais par departement",
        series_order: SeriesOrder::OldestFirst,
        gauges: &["Taux_Cloture"],
        columns: &[
            text("Departement", "Departement"),
            text("Etape", "Etape"),
            num("Taches", "Taches"),
            num("Heures", "Heures"),
            text("Statut", "Statut"),
        ],
        measure: Some("Heures"),
    },
    DashboardDomain {
        slug: "program",
        title: "Programme",
        subtitle: "Realisation du programme de production",
        series_order: SeriesOrder::OldestFirst,
        gauges: &["Realisation_Programme"],
        columns: &[
            text("Semaine", "Periode"),
            text("Cellule", "Cellule"),
            text("Programme", "Programme"),
            num("Prevu", "Prevu"),
            num("Realise", "Realise"),
        ],
        measure: Some("Realise"),
    },
    DashboardDomain {
        slug: "finance",
        title: "Finance",
        subtitle: "Depenses contre budget par centre de cout",
        series_order: SeriesOrder::OldestFirst,
        gauges: &["Marge_Brute"],
        columns: &[
            text("Centre_Cout", "Centre de cout"),
            text("Mois", "Mois"),
            num("Budget", "Budget"),
            num("Reel", "Reel"),
            num("Ecart", "Ecart"),
        ],
        measure: Some("Reel"),
    },
    DashboardDomain {
        slug: "hr",
        title: "RH",
        subtitle: "Effectifs, absenteisme et heures supplementaires",
        series_order: SeriesOrder::OldestFirst,
        gauges: &["Taux_Absenteisme"],
        columns: &[
            text("Departement", "Departement"),
            text("Semaine", "Periode"),
            num("Effectif", "Effectif"),
            num("Absences", "Absences"),
            num("Heures_Supp", "Heures supp."),
        ],
        measure: Some("Heures_Supp"),
    },
    DashboardDomain {
        slug: "supply_chain",
        title: "Supply chain",
        subtitle: "Service fournisseurs et couverture de stock",
        series_order: SeriesOrder::OldestFirst,
        gauges: &["Taux_Service"],
        columns: &[
            text("Fournisseur", "Fournisseur"),
            text("Date", "Date"),
            num("Commandes", "Commandes"),
            num("Retards", "Retards"),
            text("Motif", "Motif"),
        ],
        measure: Some("Retards"),
    },
];

/// The mock payroll route: a bare array of weekly calculation rows.
pub static PAYROLL: DashboardDomain = DashboardDomain {
    slug: "payroll",
    title: "Paie",
    subtitle: "Calcul hebdomadaire des heures et montants",
    series_order: SeriesOrder::OldestFirst,
    gauges: &[],
    columns: &[
        text("Semaine", "Semaine"),
        text("Operateur", "Operateur"),
        text("Cellule", "Cellule"),
        num("Heures_Normales", "Heures"),
        num("Heures_Supp", "Heures supp."),
        num("Montant", "Montant (EUR)"),
    ],
    measure: Some("Montant"),
};

pub fn find_domain(slug: &str) -> Option<&'static DashboardDomain> {
    DOMAINS.iter().find(|d| d.slug == slug)
}

/// Catalogue entries (payroll included) the shell has a route for, in catalogue order.
pub fn served_domains(routes: &[String]) -> Vec<&'static DashboardDomain> {
    DOMAINS
        .iter()
        .chain(std::iter::once(&PAYROLL))
        .filter(|d| routes.iter().any(|r| r == d.slug))
        .collect()
}

/// Build the API path for a domain and period.
pub fn api_path(domain: &DashboardDomain, period: Period) -> String {
    format!("/api/{}?type={}", domain.slug, period.as_query())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugs_are_unique() {
        let mut slugs: Vec<&str> = DOMAINS.iter().map(|d| d.slug).collect();
        slugs.push(PAYROLL.slug);
        let before = slugs.len();
        slugs.sort();
        slugs.dedup();
        assert_eq!(slugs.len(), before);
    }

    #[test]
    fn test_find_domain() {
        assert_eq!(find_domain("scrap").map(|d| d.title), Some("Scrap"));
        assert!(find_domain("payroll").is_none());
        assert!(find_domain("nope").is_none());
    }

    #[test]
    fn test_served_domains() {
        let routes = vec!["payroll".to_string(), "hr".to_string(), "marketing".to_string()];
        let slugs: Vec<&str> = served_domains(&routes).iter().map(|d| d.slug).collect();
        assert_eq!(slugs, vec!["hr", "payroll"]);
        assert!(served_domains(&[]).is_empty());
    }

    #[test]
    fn test_api_path() {
        let scrap = find_domain("scrap").unwrap();
        assert_eq!(api_path(scrap, Period::Weekly), "/api/scrap?type=weekly");
        assert_eq!(api_path(&PAYROLL, Period::Monthly), "/api/payroll?type=monthly");
    }
}
