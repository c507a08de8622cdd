use chainmap::{Builder, HashMap};

fn main() {
    // RUST_LOG=debug shows every resize
    env_logger::init();

    println!("=== Chained HashMap Demo ===\n");

    let mut people = demo_basic_operations();
    demo_update_and_delete(&mut people);
    demo_iteration(&people);
    demo_key_aliasing();
    demo_resize();
    demo_collisions();
    demo_word_count();
    demo_clear(&mut people);
}

fn print_json<T: serde::Serialize>(label: &str, value: &T) {
    match serde_json::to_string(value) {
        Ok(json) => println!("   {label}: {json}"),
        Err(e) => println!("   {label}: <unprintable: {e}>"),
    }
}

fn demo_basic_operations() -> HashMap<String> {
    println!("1. Basic operations:");
    let mut table = HashMap::new();

    table
        .set("nombre", "Juan".to_string())
        .set("edad", "25".to_string())
        .set("ciudad", "Madrid".to_string())
        .set("profesion", "Desarrollador".to_string());

    print_json("Table after inserts", &table);
    println!("   Size: {}", table.len());
    println!("   nombre -> {:?}", table.get("nombre"));
    println!("   edad -> {:?}", table.get("edad"));
    println!("   telefono -> {:?}", table.get("telefono"));
    println!("   has nombre? {}", table.has("nombre"));
    println!("   has telefono? {}", table.has("telefono"));
    println!();
    table
}

fn demo_update_and_delete(table: &mut HashMap<String>) {
    println!("2. Update and delete:");
    table.set("edad", "26".to_string());
    println!("   edad after update -> {:?}", table.get("edad"));
    println!("   delete ciudad: {}", table.delete("ciudad"));
    println!("   delete telefono: {}", table.delete("telefono"));
    println!("   Table now: {table:?}");
    println!();
}

fn demo_iteration(table: &HashMap<String>) {
    println!("3. Iteration:");
    table.for_each(|value, key| println!("   {key}: {value}"));
    for (key, value) in table {
        println!("   {key} = {value}");
    }
    println!("   Keys: {:?}", table.keys().collect::<Vec<_>>());
    println!("   Values: {:?}", table.values().collect::<Vec<_>>());
    println!("   Entries: {:?}", table.entries().collect::<Vec<_>>());
    print_json("Stats", &table.stats());
    println!();
}

fn demo_key_aliasing() {
    println!("4. Non-string keys are stored by their string form:");
    let mut table = HashMap::new();
    table.set(42, "num");
    println!("   set(42, \"num\"); get(\"42\") -> {:?}", table.get("42"));
    table.set("42", "str");
    println!("   set(\"42\", \"str\"); get(42) -> {:?}, size {}", table.get(42), table.len());
    println!();
}

fn demo_resize() {
    println!("5. Resize under insertion pressure:");
    let mut big = HashMap::with_capacity(4);
    for i in 0..20 {
        big.set(format!("key{i}"), format!("value{i}"));
    }
    print_json("Big table stats", &big.stats());
    println!("   Load factor: {:.2}", big.load_factor());
    println!();
}

fn demo_collisions() {
    println!("6. Collisions in a tiny table:");
    let mut small = match Builder::new().capacity(2).build() {
        Ok(map) => map,
        Err(e) => {
            println!("   could not build table: {e}");
            return;
        }
    };
    small.set("a", 1).set("b", 2).set("c", 3).set("d", 4);
    println!("   Small table: {small:?}");
    print_json("Small table stats", &small.stats());
    println!();
}

fn demo_word_count() {
    println!("7. Entry API word count:");
    let text = "el perro y el gato y el pajaro";
    let mut counts: HashMap<usize> = HashMap::with_capacity(2);
    for word in text.split_whitespace() {
        *counts.entry(word).or_default() += 1;
    }
    print_json("Counts", &counts);
    println!();
}

fn demo_clear(table: &mut HashMap<String>) {
    println!("8. Clear:");
    table.clear();
    println!("   Size after clear: {}", table.len());
    println!("   Empty? {}", table.is_empty());
    println!("   Capacity kept: {}", table.capacity());
}
