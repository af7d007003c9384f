use quadro_columnar::{Column, ColumnType};
use quadro_model::DataFrame;
use serde_json::json;

fn name_age_frame() -> DataFrame {
    let mut frame = DataFrame::new();
    frame
        .add_column(Column::new("name", ColumnType::String))
        .unwrap();
    frame.add_column(Column::new("age", ColumnType::Int)).unwrap();
    frame.add_row_json(&[json!("alice"), json!(30)]).unwrap();
    frame.add_row_json(&[json!("bob"), json!(null)]).unwrap();
    frame
}

#[test]
fn display_is_fixed_width_pipe_delimited() {
    let frame = name_age_frame();

    let expected = concat!(
        "| name       | age        | \n",
        "|=========================|\n",
        "| alice      | 30         | \n",
        "| bob        | N/A        | \n",
    );
    assert_eq!(frame.to_string(), expected);
}

#[test]
fn display_follows_the_logical_row_order() {
    let mut frame = name_age_frame();
    frame.set_row_order(vec![1, 0]).unwrap();

    let expected = concat!(
        "| name       | age        | \n",
        "|=========================|\n",
        "| bob        | N/A        | \n",
        "| alice      | 30         | \n",
    );
    assert_eq!(frame.to_string(), expected);
}

#[test]
fn separator_rule_scales_with_the_column_count() {
    let mut frame = DataFrame::new();
    frame.add_column(Column::new("n", ColumnType::Int)).unwrap();

    let expected = concat!("| n          | \n", "|============|\n");
    assert_eq!(frame.to_string(), expected);
}

#[test]
fn frames_without_columns_render_header_and_rule_only() {
    let frame = DataFrame::new();
    assert_eq!(frame.to_string(), "| \n||\n");
}

#[test]
fn cells_wider_than_the_minimum_are_not_truncated() {
    let mut frame = DataFrame::new();
    frame
        .add_column(Column::new("word", ColumnType::String))
        .unwrap();
    frame.add_row_strs(&["supercalifragilistic"]).unwrap();

    let expected = concat!(
        "| word       | \n",
        "|============|\n",
        "| supercalifragilistic | \n",
    );
    assert_eq!(frame.to_string(), expected);
}

#[test]
fn unmapped_order_entries_render_the_placeholder_cell() {
    let mut frame = DataFrame::new();
    frame.add_column(Column::new("n", ColumnType::Int)).unwrap();
    frame.add_row_strs(&["7"]).unwrap();
    frame.set_row_order(vec![5]).unwrap();

    let expected = concat!("| n          | \n", "|============|\n", "| N/A        | \n");
    assert_eq!(frame.to_string(), expected);
}
