use rating_chart_rs::api::{format_axis_tick, format_number};

#[test]
fn integral_values_print_without_a_fraction() {
    assert_eq!(format_number(1500.0), "1500");
    assert_eq!(format_number(-42.0), "-42");
    assert_eq!(format_number(0.0), "0");
}

#[test]
fn fractional_values_keep_their_fraction() {
    assert_eq!(format_number(1234.5), "1234.5");
    assert_eq!(format_number(0.25), "0.25");
}

#[test]
fn axis_ticks_round_to_two_decimals() {
    assert_eq!(format_axis_tick(3.14159), "3.14");
    assert_eq!(format_axis_tick(2.0), "2");
    assert_eq!(format_axis_tick(2.5), "2.5");
    assert_eq!(format_axis_tick(1999.999), "2000");
}
