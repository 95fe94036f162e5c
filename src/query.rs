//! List Queries

use std::fmt::{Display, Formatter, Result as FmtResult};

use smallvec::SmallVec;

/// Products shown per page.
pub const PAGE_SIZE: u32 = 10;

/// Columns the product list can be sorted by.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SortColumn {
    /// Product name
    #[default]
    Name,

    /// Category label
    Category,

    /// Unit price
    Price,

    /// Units in stock
    StockQuantity,
}

impl SortColumn {
    /// Every sortable column, in table order.
    pub const ALL: [Self; 4] = [Self::Name, Self::Category, Self::Price, Self::StockQuantity];

    /// Property name understood by the products API.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Category => "category",
            Self::Price => "price",
            Self::StockQuantity => "stockQuantity",
        }
    }

    /// Column heading.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Category => "Category",
            Self::Price => "Price",
            Self::StockQuantity => "Stock",
        }
    }
}

impl Display for SortColumn {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SortDirection {
    /// Ascending
    #[default]
    Asc,

    /// Descending
    Desc,
}

impl SortDirection {
    /// Returns the opposite direction.
    #[must_use]
    pub const fn flipped(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }

    /// Direction name understood by the products API.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

impl Display for SortDirection {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

/// Active sort of the product list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Sort {
    /// Sorted column
    pub column: SortColumn,

    /// Sort direction
    pub direction: SortDirection,
}

impl Sort {
    /// Sort by `column` ascending.
    pub const fn ascending(column: SortColumn) -> Self {
        Self {
            column,
            direction: SortDirection::Asc,
        }
    }

    /// Indicator for a column heading: `↕` when unsorted, otherwise the direction arrow.
    #[must_use]
    pub fn indicator(self, column: SortColumn) -> &'static str {
        if self.column != column {
            return "↕";
        }

        match self.direction {
            SortDirection::Asc => "↑",
            SortDirection::Desc => "↓",
        }
    }
}

impl Display for Sort {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{},{}", self.column, self.direction)
    }
}

/// Parameters of one product list request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQuery {
    /// Zero-based page index
    pub page: u32,

    /// Page size
    pub size: u32,

    /// Name filter; empty means unfiltered
    pub name: String,

    /// Category filter; empty means unfiltered
    pub category: String,

    /// Requested ordering
    pub sort: Sort,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            page: 0,
            size: PAGE_SIZE,
            name: String::new(),
            category: String::new(),
            sort: Sort::default(),
        }
    }
}

impl ListQuery {
    /// Query string pairs. Filters are only present when non-empty.
    #[must_use]
    pub fn params(&self) -> SmallVec<[(&'static str, String); 5]> {
        let mut params: SmallVec<[(&'static str, String); 5]> = SmallVec::new();

        params.push(("page", self.page.to_string()));
        params.push(("size", self.size.to_string()));
        params.push(("sort", self.sort.to_string()));

        if !self.name.is_empty() {
            params.push(("name", self.name.clone()));
        }

        if !self.category.is_empty() {
            params.push(("category", self.category.clone()));
        }

        params
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn param<'a>(query: &'a [(&'static str, String)], key: &str) -> Option<&'a str> {
        query
            .iter()
            .find(|(name, _)| *name == key)
            .map(|(_, value)| value.as_str())
    }

    #[test]
    fn default_query_sorts_by_name_ascending() {
        let params = ListQuery::default().params();

        assert_eq!(param(&params, "page"), Some("0"));
        assert_eq!(param(&params, "size"), Some("10"));
        assert_eq!(param(&params, "sort"), Some("name,asc"));
        assert_eq!(params.len(), 3, "no filters expected");
    }

    #[test]
    fn params_include_only_non_empty_filters() {
        let query = ListQuery {
            page: 2,
            category: "Kitchen".to_string(),
            sort: Sort {
                column: SortColumn::StockQuantity,
                direction: SortDirection::Desc,
            },
            ..ListQuery::default()
        };

        let params = query.params();

        assert_eq!(param(&params, "name"), None);
        assert_eq!(param(&params, "category"), Some("Kitchen"));
        assert_eq!(param(&params, "sort"), Some("stockQuantity,desc"));
        assert_eq!(param(&params, "page"), Some("2"));
    }

    #[test]
    fn params_include_both_filters() {
        let query = ListQuery {
            name: "mug".to_string(),
            category: "Kitchen".to_string(),
            ..ListQuery::default()
        };

        let params = query.params();

        assert_eq!(param(&params, "name"), Some("mug"));
        assert_eq!(param(&params, "category"), Some("Kitchen"));
        assert_eq!(params.len(), 5, "both filters expected");
    }

    #[test]
    fn indicator_reflects_active_column_and_direction() {
        let sort = Sort {
            column: SortColumn::Price,
            direction: SortDirection::Desc,
        };

        assert_eq!(sort.indicator(SortColumn::Name), "↕");
        assert_eq!(sort.indicator(SortColumn::Price), "↓");
        assert_eq!(Sort::ascending(SortColumn::Price).indicator(SortColumn::Price), "↑");
    }

    #[test]
    fn direction_flips() {
        assert_eq!(SortDirection::Asc.flipped(), SortDirection::Desc);
        assert_eq!(SortDirection::Desc.flipped(), SortDirection::Asc);
    }
}
