use std::borrow::Cow;

/// Registro filtrable por el buscador de la tabla
pub trait Searchable {
    /// Campos de texto visibles sobre los que se busca
    fn search_fields(&self) -> Vec<Cow<'_, str>>;
}

/// Filtro local, sin ir al servidor: substring case-insensitive sobre
/// cualquiera de los campos. Conserva el orden relativo original.
pub fn filter_records<'a, T: Searchable>(records: &'a [T], query: &str) -> Vec<&'a T> {
    let needle = query.to_lowercase();
    if needle.is_empty() {
        return records.iter().collect();
    }

    records
        .iter()
        .filter(|record| {
            record
                .search_fields()
                .iter()
                .any(|field| field.to_lowercase().contains(&needle))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct Row(&'static str, &'static str);

    impl Searchable for Row {
        fn search_fields(&self) -> Vec<Cow<'_, str>> {
            vec![Cow::Borrowed(self.0), Cow::Borrowed(self.1)]
        }
    }

    fn rows() -> Vec<Row> {
        vec![
            Row("Acme Corp", "Pune"),
            Row("Blue Ocean", "Mumbai"),
            Row("acme labs", "Delhi"),
            Row("Zenith", "PUNE"),
            Row("Orbit", "Chennai"),
        ]
    }

    #[test]
    fn matches_k_of_n_in_original_order() {
        let rows = rows();
        let hits = filter_records(&rows, "ACME");
        assert_eq!(hits, vec![&rows[0], &rows[2]]);

        let hits = filter_records(&rows, "pune");
        assert_eq!(hits, vec![&rows[0], &rows[3]]);
    }

    #[test]
    fn empty_query_returns_everything() {
        let rows = rows();
        assert_eq!(filter_records(&rows, "").len(), rows.len());
    }

    #[test]
    fn no_match_returns_empty() {
        let rows = rows();
        assert!(filter_records(&rows, "kolkata").is_empty());
    }
}
