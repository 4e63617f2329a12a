use crate::value::Value;
use approx::assert_relative_eq;

#[test]
fn test_backward_leaf_root() {
    let x = Value::new(4.0);
    x.backward();
    assert_eq!(x.grad(), 1.0);
}

#[test]
fn test_backward_shared_operand_accumulates() {
    let x = Value::new(3.0);
    let y = &(&x * &x) + &x;
    assert_eq!(y.data(), 12.0);
    y.backward();
    // dy/dx = 2x + 1
    assert_eq!(x.grad(), 7.0);
    assert_eq!(y.grad(), 1.0);
}

#[test]
fn test_backward_expression_graph() {
    // L = (a*b + c) * f
    let a = Value::with_label(2.0, "a");
    let b = Value::with_label(-3.0, "b");
    let c = Value::with_label(10.0, "c");
    let e = &a * &b;
    let d = &e + &c;
    let f = Value::with_label(-2.0, "f");
    let l = &d * &f;
    assert_eq!(l.data(), -8.0);

    l.backward();
    assert_eq!(f.grad(), 4.0);
    assert_eq!(d.grad(), -2.0);
    assert_eq!(c.grad(), -2.0);
    assert_eq!(e.grad(), -2.0);
    assert_eq!(a.grad(), 6.0);
    assert_eq!(b.grad(), -4.0);
}

#[test]
fn test_backward_neuron_like_expression() {
    // o = tanh(x1*w1 + x2*w2 + b)
    let x1 = Value::new(2.0);
    let x2 = Value::new(0.0);
    let w1 = Value::new(-3.0);
    let w2 = Value::new(1.0);
    let b = Value::new(6.881_373_587_019_543);
    let n = &(&(&x1 * &w1) + &(&x2 * &w2)) + &b;
    let o = n.tanh();
    assert_relative_eq!(o.data(), 0.707_106_781_186_547_6, epsilon = 1e-12);

    o.backward();
    assert_relative_eq!(n.grad(), 0.5, epsilon = 1e-12);
    assert_relative_eq!(x1.grad(), -1.5, epsilon = 1e-12);
    assert_relative_eq!(w1.grad(), 1.0, epsilon = 1e-12);
    assert_relative_eq!(x2.grad(), 0.5, epsilon = 1e-12);
    assert_relative_eq!(w2.grad(), 0.0, epsilon = 1e-12);
}

#[test]
fn test_second_backward_accumulates_and_zero_grad_graph_resets() {
    let x = Value::new(2.0);
    let y = &x * 3.0;
    y.backward();
    assert_eq!(x.grad(), 3.0);

    y.backward();
    assert_eq!(x.grad(), 6.0);

    y.zero_grad_graph();
    assert_eq!(x.grad(), 0.0);
    assert_eq!(y.grad(), 0.0);

    y.backward();
    assert_eq!(x.grad(), 3.0);
}

#[test]
fn test_zero_grad_single_node() {
    let x = Value::new(2.0);
    let y = x.exp();
    y.backward();
    assert!(x.grad() != 0.0);
    x.zero_grad();
    assert_eq!(x.grad(), 0.0);
    assert_eq!(y.grad(), 1.0);
}

#[test]
fn test_backward_from_intermediate_node_leaves_downstream_untouched() {
    let x = Value::new(1.5);
    let h = &x * 2.0;
    let out = h.tanh();
    h.backward();
    assert_eq!(x.grad(), 2.0);
    assert_eq!(out.grad(), 0.0);
}

#[test]
fn test_reads_are_idempotent() {
    let x = Value::new(0.3);
    let y = x.sigmoid();
    y.backward();
    let (d1, g1) = (y.data(), x.grad());
    let (d2, g2) = (y.data(), x.grad());
    assert_eq!(d1, d2);
    assert_eq!(g1, g2);
    assert_eq!(y.op_tag(), y.op_tag());
}
