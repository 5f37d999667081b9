use std::str::FromStr;

/// Language of the console report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Locale {
    English,
    Polish,
}

impl Default for Locale {
    fn default() -> Self {
        Locale::English
    }
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "en" | "english" => Ok(Locale::English),
            "pl" | "polish" | "polski" => Ok(Locale::Polish),
            _ => Err(format!("unknown locale `{}`", s)),
        }
    }
}

/// Every string the report prints.
#[derive(Debug, Clone, PartialEq)]
pub struct Labels {
    pub available_items: &'static str,
    pub capacity: &'static str,
    pub weight: &'static str,
    pub value: &'static str,
    pub density: &'static str,
    pub exhaustive_result: &'static str,
    pub greedy_result: &'static str,
    pub total_weight: &'static str,
    pub total_value: &'static str,
    pub no_solution: &'static str,
    pub summary: &'static str,
    pub item_count: &'static str,
    pub exhaustive_summary: &'static str,
    pub greedy_summary: &'static str,
    // Short forms used in the summary lines
    pub value_short: &'static str,
    pub weight_short: &'static str,
    pub time_short: &'static str,
}

static ENGLISH: Labels = Labels {
    available_items: "Available items:",
    capacity: "Maximum backpack weight (max_weight):",
    weight: "weight",
    value: "value",
    density: "value/weight",
    exhaustive_result: "Exhaustive search result",
    greedy_result: "Heuristic result",
    total_weight: "Total weight:",
    total_value: "Total value:",
    no_solution: "No solution found",
    summary: "Summary:",
    item_count: "Number of items:",
    exhaustive_summary: "Exhaustive search result:",
    greedy_summary: "Heuristic method result:  ",
    value_short: "value",
    weight_short: "weight",
    time_short: "time",
};

static POLISH: Labels = Labels {
    available_items: "Dostępne przedmioty:",
    capacity: "Maksymalna masa plecaka (M):",
    weight: "m",
    value: "p",
    density: "p/m",
    exhaustive_result: "Wynik przeglądu wyczerpującego",
    greedy_result: "Wynik heurestyki",
    total_weight: "Suma m:",
    total_value: "Suma p:",
    no_solution: "Nie znaleziono rozwiązania",
    summary: "Podsumowanie:",
    item_count: "Liczba przedmiotów:",
    exhaustive_summary: "Wynik przeglądu wyczerpującego:",
    greedy_summary: "Wynik przy użyciu heurestyki:  ",
    value_short: "p",
    weight_short: "m",
    time_short: "t",
};

impl Labels {
    pub fn for_locale(locale: Locale) -> &'static Labels {
        match locale {
            Locale::English => &ENGLISH,
            Locale::Polish => &POLISH,
        }
    }
}
