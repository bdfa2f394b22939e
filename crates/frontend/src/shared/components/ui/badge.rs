use leptos::prelude::*;

/// Badge variant for a status value of any report table
pub fn status_variant(status: &str) -> &'static str {
    match status {
        "In Stock" | "Active" | "Completed" | "Delivered" | "IN" | "STOCK_IN" | "CREATE" => {
            "success"
        }
        "Low Stock" | "Pending" | "Preparing" | "Maintenance" | "UPDATE" | "TRANSFER" => "warning",
        "Out of Stock" | "Cancelled" | "Returned" | "OUT" | "STOCK_OUT" | "DELETE" => "error",
        "In Transit" | "Shipped" => "primary",
        _ => "neutral",
    }
}

/// Badge component with different variants
#[component]
pub fn Badge(
    /// Badge variant: "primary", "success", "warning", "error", "neutral" (default)
    #[prop(optional, into)]
    variant: MaybeProp<String>,
    /// Badge content
    children: Children,
    /// Additional CSS classes
    #[prop(optional, into)]
    class: MaybeProp<String>,
) -> impl IntoView {
    let variant_class = move || match variant.get().as_deref().unwrap_or("neutral") {
        "primary" => "badge--primary",
        "success" => "badge--success",
        "warning" => "badge--warning",
        "error" => "badge--error",
        _ => "badge--neutral",
    };

    let additional_class = move || class.get().unwrap_or_default();

    view! {
        <span class=move || format!("badge {} {}", variant_class(), additional_class())>
            {children()}
        </span>
    }
}

/// Status cell badge, colour picked by [`status_variant`]
#[component]
pub fn StatusBadge(
    #[prop(into)]
    status: String,
) -> impl IntoView {
    let variant = status_variant(&status);
    view! {
        <Badge variant=variant.to_string() class="badge--status".to_string()>
            {status}
        </Badge>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_variant() {
        assert_eq!(status_variant("In Stock"), "success");
        assert_eq!(status_variant("Low Stock"), "warning");
        assert_eq!(status_variant("Out of Stock"), "error");
        assert_eq!(status_variant("In Transit"), "primary");
        assert_eq!(status_variant("whatever"), "neutral");
    }
}
