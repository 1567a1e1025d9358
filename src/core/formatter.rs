use crate::domain::model::Vehicle;

const ORDER_URL_PREFIX: &str = "https://www.tesla.com/m3/order/";

/// Render one vehicle as the multi-line block printed to stdout.
pub fn render(vehicle: &Vehicle) -> String {
    let mut output = String::new();

    // Trim and pickup location
    output.push_str(&vehicle.trim_name);
    match (&vehicle.sales_metro, &vehicle.state_province) {
        (Some(metro), Some(state)) => {
            output.push_str(&format!(" in {}, {}\n", metro, state));
        }
        (Some(metro), None) => {
            output.push_str(&format!(" in {}\n", metro));
        }
        _ => output.push_str(" needing transfer\n"),
    }

    // Price and mileage
    output.push_str(&format!(
        "is selling for {} with {}mi",
        vehicle.total_price, vehicle.odometer
    ));

    // Demo cars are not truly new, so say so
    if vehicle.is_demo {
        output.push_str(" and is a demo.\n");
    } else {
        output.push_str(".\n");
    }

    // Purchase URL for easy clicking
    output.push_str(ORDER_URL_PREFIX);
    output.push_str(&vehicle.vin);

    output.push('\n');
    output.push_str(&"-".repeat(80));

    output
}
