//! Inline HTML rendering. No template engine; pages are assembled from
//! strings with entity escaping for anything user-provided.
use ucol_store::Offering;
use ucol_store::Program;

/// Escape user text for interpolation into HTML.
fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

fn layout(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\
         <html lang=\"es\"><head><meta charset=\"utf-8\"><title>{title}</title></head>\
         <body>\
         <nav>\
         <a href=\"/\">Inicio</a> \
         <a href=\"/mision\">Misión</a> \
         <a href=\"/vision\">Visión</a> \
         <a href=\"/carreras/vista\">Carreras</a> \
         <a href=\"/chat\">Chat</a>\
         </nav>\
         {body}\
         </body></html>"
    )
}

pub fn index() -> String {
    layout(
        "Universitaria de Colombia",
        "<h1>Universitaria de Colombia</h1>\
         <p>Bienvenido al portal institucional de la Universitaria de Colombia.</p>",
    )
}

pub fn mision() -> String {
    layout(
        "Misión",
        "<h1>Misión</h1>\
         <p>Formar profesionales íntegros con vocación de servicio a la sociedad colombiana.</p>",
    )
}

pub fn vision() -> String {
    layout(
        "Visión",
        "<h1>Visión</h1>\
         <p>Ser reconocida como institución líder en educación superior de calidad.</p>",
    )
}

pub fn chat(prompt: Option<&str>, reply: Option<&str>) -> String {
    let mut body = String::from(
        "<h1>Asistente Virtual</h1>\
         <form method=\"post\" action=\"/predict\">\
         <input type=\"text\" name=\"prompt\" required>\
         <button type=\"submit\">Enviar</button>\
         </form>",
    );
    if let (Some(prompt), Some(reply)) = (prompt, reply) {
        body.push_str(&format!(
            "<p><strong>Tú:</strong> {}</p><p><strong>Asistente:</strong> {}</p>",
            escape(prompt),
            escape(reply)
        ));
    }
    layout("Asistente Virtual", &body)
}

pub fn carreras(offerings: &[Offering]) -> String {
    let rows = offerings
        .iter()
        .map(|o| {
            format!(
                "<tr><td>{}</td><td>{}</td><td>{}</td></tr>",
                escape(&o.description),
                o.duration_semesters,
                o.price_per_semester
            )
        })
        .collect::<String>();
    layout(
        "Nuestras Carreras",
        &format!(
            "<h1>Nuestras Carreras</h1>\
             <table>\
             <tr><th>Carrera</th><th>Semestres</th><th>Precio por semestre</th></tr>\
             {rows}\
             </table>"
        ),
    )
}

pub fn programas(programs: &[Program]) -> String {
    let rows = programs
        .iter()
        .map(|p| {
            format!(
                "<tr><td>{id}</td><td>{desc}</td><td>{dur}</td><td>{price}</td>\
                 <td><a href=\"/editar/{id}\">Editar</a> \
                 <form method=\"post\" action=\"/eliminar/{id}\">\
                 <button type=\"submit\">Eliminar</button>\
                 </form></td></tr>",
                id = p.id,
                desc = escape(&p.description),
                dur = p.duration_semesters,
                price = p.price_per_semester
            )
        })
        .collect::<String>();
    layout(
        "Programas",
        &format!(
            "<h1>Administración de Programas</h1>\
             <table>\
             <tr><th>Id</th><th>Descripción</th><th>Semestres</th><th>Precio</th><th></th></tr>\
             {rows}\
             </table>\
             <h2>Agregar programa</h2>\
             <form method=\"post\" action=\"/agregar_programa\">\
             <input type=\"text\" name=\"description\" required>\
             <input type=\"number\" name=\"duration\" required>\
             <input type=\"number\" name=\"price\" step=\"any\" required>\
             <button type=\"submit\">Agregar</button>\
             </form>"
        ),
    )
}

pub fn editar(program: &Program) -> String {
    layout(
        "Editar carrera",
        &format!(
            "<h1>Editar carrera {id}</h1>\
             <form method=\"post\" action=\"/editar/{id}\">\
             <input type=\"text\" name=\"description\" value=\"{desc}\" required>\
             <input type=\"number\" name=\"duration\" value=\"{dur}\" required>\
             <input type=\"number\" name=\"price\" value=\"{price}\" step=\"any\" required>\
             <button type=\"submit\">Guardar</button>\
             </form>",
            id = program.id,
            desc = escape(&program.description),
            dur = program.duration_semesters,
            price = program.price_per_semester
        ),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_text_is_entity_escaped() {
        assert!(escape("<b>\"x\" & y</b>") == "&lt;b&gt;&quot;x&quot; &amp; y&lt;/b&gt;");
    }

    #[test]
    fn edit_form_posts_back_to_the_same_id() {
        let program = Program {
            id: 7,
            description: "Derecho".to_string(),
            duration_semesters: 9,
            price_per_semester: 2_000_000.0,
        };
        let html = editar(&program);
        assert!(html.contains("action=\"/editar/7\""));
        assert!(html.contains("value=\"Derecho\""));
    }
}
