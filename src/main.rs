use std::env;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    // Get the ingredient list from command-line arguments
    let args: Vec<String> = env::args().collect();
    let ingredients = args
        .get(1)
        .ok_or("Please provide a comma-separated list of ingredients as an argument")?;

    let plan = meal_planner::plan_meal(ingredients).await?;

    println!("Meal:\n{}\n", plan.meal);
    println!("Shopping list:\n{}\n", plan.shopping_list);
    println!("Instructions:\n{}", plan.instructions);

    Ok(())
}
