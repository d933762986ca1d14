//! Plan a meal with the high-level convenience function.
//!
//! Requires OPENAI_API_KEY (or a config.toml / MEALPLAN__API_KEY) to be
//! set, since this talks to the real completion service.

use meal_planner::plan_meal;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let plan = plan_meal("chicken, rice, broccoli").await?;

    println!("=== Meal ===");
    println!("{}", plan.meal);
    println!("\n=== Shopping list ===");
    println!("{}", plan.shopping_list);
    println!("\n=== Instructions ===");
    println!("{}", plan.instructions);

    Ok(())
}
