#[allow(unused)]
pub mod arrow {
    pub const UP: &str = "↑";
    pub const DOWN: &str = "↓";
    pub const LEFT: &str = "←";
    pub const RIGHT: &str = "→";
}

pub mod triangle {
    pub const UP_SMALL: &str = "▴";
    pub const DOWN_SMALL: &str = "▾";
}

/// Sort state marker shown next to a column title.
pub fn sort_marker(direction: gridcells::grid::SortDirection) -> &'static str {
    use gridcells::grid::SortDirection;
    match direction {
        SortDirection::Asc => triangle::UP_SMALL,
        SortDirection::Desc => triangle::DOWN_SMALL,
        SortDirection::Neutral => "",
    }
}
