//! Interactive shape management console.
//!
//! Text-menu front end over the planar library: create shapes from
//! prompted numeric fields, then list, query, translate, scale, and
//! remove them by 1-based position.

use planar::{
    check_scale_factor, Circle, Point, Rectangle, Shape, ShapeCollection, Square, Triangle,
};
use std::io::{self, BufRead, Write};

fn main() {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut collection = ShapeCollection::new();

    loop {
        print_menu();
        let choice = match read_line(&mut input) {
            Some(line) => line,
            None => break,
        };

        match choice.as_str() {
            "1" => add_shape(&mut input, &mut collection),
            "2" => remove_shape(&mut input, &mut collection),
            "3" => show_shape(&mut input, &collection),
            "4" => show_area_and_perimeter(&mut input, &collection),
            "5" => print!("{}", collection.describe_all()),
            "6" => translate_shapes(&mut input, &mut collection),
            "7" => scale_shapes(&mut input, &mut collection),
            "8" => {
                println!("Exiting...");
                break;
            }
            _ => println!("Invalid choice. Please try again."),
        }
    }
}

fn print_menu() {
    println!();
    println!("Shape Management Menu:");
    println!("1. Add Shape");
    println!("2. Remove Shape by Position");
    println!("3. Get Information About a Shape by Position");
    println!("4. Display Area and Perimeter Of a Shape by Position");
    println!("5. Display information of all the shapes");
    println!("6. Translate all the shapes");
    println!("7. Scale All Shapes");
    println!("8. Exit");
    print!("Enter your choice: ");
    let _ = io::stdout().flush();
}

/// Reads one trimmed line; `None` on EOF or read failure.
fn read_line(input: &mut impl BufRead) -> Option<String> {
    let mut line = String::new();
    match input.read_line(&mut line) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(line.trim().to_string()),
    }
}

/// Prompts until the user supplies a parsable number; `None` on EOF.
fn read_f64(input: &mut impl BufRead, prompt: &str) -> Option<f64> {
    loop {
        print!("{prompt}");
        let _ = io::stdout().flush();
        let line = read_line(input)?;
        match line.parse::<f64>() {
            Ok(value) => return Some(value),
            Err(_) => println!("Invalid number. Please try again."),
        }
    }
}

fn read_usize(input: &mut impl BufRead, prompt: &str) -> Option<usize> {
    loop {
        print!("{prompt}");
        let _ = io::stdout().flush();
        let line = read_line(input)?;
        match line.parse::<usize>() {
            Ok(value) => return Some(value),
            Err(_) => println!("Invalid position. Please try again."),
        }
    }
}

fn read_point(input: &mut impl BufRead, label: &str) -> Option<Point> {
    let x = read_f64(input, &format!("Enter {label} x: "))?;
    let y = read_f64(input, &format!("Enter {label} y: "))?;
    Some(Point::from_coords(x, y))
}

fn add_shape(input: &mut impl BufRead, collection: &mut ShapeCollection) {
    println!("Select Shape to Add:");
    println!("1. Rectangle");
    println!("2. Square");
    println!("3. Circle");
    println!("4. Triangle");
    print!("Enter your choice: ");
    let _ = io::stdout().flush();

    let choice = match read_line(input) {
        Some(line) => line,
        None => return,
    };

    let shape = match choice.as_str() {
        "1" => {
            let Some(position) = read_point(input, "position") else { return };
            let Some(width) = read_f64(input, "Enter width: ") else { return };
            let Some(length) = read_f64(input, "Enter length: ") else { return };
            Shape::from(Rectangle::new(position, width, length))
        }
        "2" => {
            let Some(position) = read_point(input, "position") else { return };
            let Some(side) = read_f64(input, "Enter side: ") else { return };
            Shape::from(Square::new(position, side))
        }
        "3" => {
            let Some(position) = read_point(input, "position") else { return };
            let Some(radius) = read_f64(input, "Enter radius: ") else { return };
            Shape::from(Circle::new(position, radius))
        }
        "4" => {
            let Some(v1) = read_point(input, "vertex 1") else { return };
            let Some(v2) = read_point(input, "vertex 2") else { return };
            let Some(v3) = read_point(input, "vertex 3") else { return };
            Shape::from(Triangle::new(v1, v2, v3))
        }
        _ => {
            println!("Invalid choice. No shape added.");
            return;
        }
    };

    collection.add(shape);
    println!("Shape added successfully.");
}

fn remove_shape(input: &mut impl BufRead, collection: &mut ShapeCollection) {
    let Some(pos) = read_usize(input, "Enter the position of the shape to remove: ") else {
        return;
    };
    match collection.remove(pos) {
        Some(removed) => println!("Removed shape: {removed}"),
        None => println!("Invalid position."),
    }
}

fn show_shape(input: &mut impl BufRead, collection: &ShapeCollection) {
    let Some(pos) = read_usize(input, "Enter the position of the shape: ") else {
        return;
    };
    match collection.get(pos) {
        Some(shape) => println!("Shape {pos}: {shape}"),
        None => println!("Invalid position."),
    }
}

fn show_area_and_perimeter(input: &mut impl BufRead, collection: &ShapeCollection) {
    let Some(pos) = read_usize(input, "Enter the position of the shape: ") else {
        return;
    };
    // get() rather than the -1.0 sentinel accessors, so a legitimately
    // negative area is still reported as such
    match collection.get(pos) {
        Some(shape) => {
            println!("Shape {pos}:");
            println!("Area: {}", shape.area());
            println!("Perimeter: {}", shape.perimeter());
        }
        None => println!("Invalid position."),
    }
}

fn translate_shapes(input: &mut impl BufRead, collection: &mut ShapeCollection) {
    let Some(dx) = read_f64(input, "Enter the translation value dx: ") else { return };
    let Some(dy) = read_f64(input, "Enter the translation value dy: ") else { return };
    collection.translate_all(dx, dy);
    println!("Shapes translated successfully.");
}

fn scale_shapes(input: &mut impl BufRead, collection: &mut ShapeCollection) {
    let Some(factor) = read_f64(input, "Enter the scaling factor: ") else { return };
    let Some(flag) = read_f64(input, "Enter the sign (1 for scaling up, 0 for scaling down): ")
    else {
        return;
    };
    let sign = flag != 0.0;
    if let Err(err) = check_scale_factor(factor, sign) {
        println!("{err}");
        return;
    }
    collection.scale_all(factor, sign);
    println!("Shapes scaled successfully.");
}
