mod fetch_generation;
