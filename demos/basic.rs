use static_vector::*;

fn main() {
    let mut names = static_vec!(7;
        "1".to_owned(),
        "2".to_owned(),
        "3".to_owned(),
        "4".to_owned());

    names.erase(1..3);
    names.emplace_back(|| "5".repeat(2));

    println!("{names:?} ({} of {})", names.len(), names.capacity());
}
