use linked_queues::StackQueue;

fn print_first(q: &mut StackQueue<i32>) {
    match q.first() {
        Some(first) => println!("first element: {}", first),
        None => println!("first element: none"),
    }
}

fn main() {
    let mut q = StackQueue::new();
    q.enqueue(0);
    print_first(&mut q);

    q.enqueue(1);
    q.enqueue(2);
    q.dequeue();
    println!("{}", q);
    print_first(&mut q);

    q.extend(3..=5);
    println!("{}", q);

    q.dequeue();
    println!("{}", q);
    print_first(&mut q);
}
