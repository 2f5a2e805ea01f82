/// Depoimento estático de la sección de testimonios
#[derive(Debug, Clone, PartialEq)]
pub struct Testimonial {
    pub name: &'static str,
    pub role: &'static str,
    pub content: &'static str,
    pub avatar: &'static str,
}

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        name: "Alex Silva",
        role: "Atleta Profissional",
        content: "BATS Energy revolucionou minha rotina de treinos. A energia é constante e sem aquela queda depois de algumas horas!",
        avatar: "A",
    },
    Testimonial {
        name: "Marina Costa",
        role: "Influenciadora Digital",
        content: "Além do design incrível que combina com meu estilo, o sabor é perfeito e me dá energia para maratonas de conteúdo.",
        avatar: "M",
    },
    Testimonial {
        name: "Lucas Mendes",
        role: "Desenvolvedor de Games",
        content: "Nas noites de programação intensa, BATS Energy é meu companheiro essencial. Mantenho o foco por horas!",
        avatar: "L",
    },
    Testimonial {
        name: "Carla Lopes",
        role: "DJ",
        content: "A única bebida energética que confio para minhas apresentações. Design futurista e energia que dura a noite toda!",
        avatar: "C",
    },
];
