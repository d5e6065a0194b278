use color_eyre::Result;
use dialoguer::{Input, Select};

/// Pick one entry from `items`, returning its index
pub fn prompt_select<T: ToString>(prompt: &str, items: &[T], default: usize) -> Result<usize> {
    Select::new()
        .with_prompt(prompt)
        .items(items)
        .default(default)
        .interact()
        .map_err(|e| color_eyre::eyre::eyre!("Failed to read selection: {}", e))
}

/// Prompt for a number in `min..=max`, asking again on invalid input
pub fn prompt_number_in_range(prompt: &str, min: usize, max: usize) -> Result<usize> {
    loop {
        let input_str = Input::<String>::new()
            .with_prompt(format!("{} ({}-{})", prompt, min, max))
            .interact_text()
            .map_err(|e| color_eyre::eyre::eyre!("Failed to read input: {}", e))?;

        match input_str.trim().parse::<usize>() {
            Ok(num) if (min..=max).contains(&num) => return Ok(num),
            _ => eprintln!("Invalid input. Please enter a number between {} and {}.", min, max),
        }
    }
}
