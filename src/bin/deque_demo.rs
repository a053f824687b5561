use linked_queues::Deque;

fn main() {
    let mut d = Deque::new();
    d.add_last(5);
    d.add_first(3);
    d.add_first(7);

    if let Some(first) = d.first() {
        println!("first element of deque: {}", first);
    }
    println!("{}", d);
    if let Some(last) = d.last() {
        println!("last element of deque: {}", last);
    }

    d.remove_last();
    println!("{}", d);
}
