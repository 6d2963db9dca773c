pub mod lookup_food;
